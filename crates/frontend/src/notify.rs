//! One-shot user-facing notices

use tracing::{error, info, warn};

/// Shows short notices to the user (toasts in a browser, stderr in a CLI)
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Emits notices as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        info!(target: "sayhi::notice", "{message}");
    }

    fn warning(&self, message: &str) {
        warn!(target: "sayhi::notice", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "sayhi::notice", "{message}");
    }
}
