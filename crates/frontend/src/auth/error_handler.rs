//! Session expiry handling
//!
//! Registered as a response interceptor so every failed call is checked
//! without callers having to look for authorization errors themselves.

use super::AuthStore;
use crate::config::Notices;
use crate::notify::Notifier;
use crate::router::{LOGIN_PATH, Router};
use reqwest::StatusCode;
use sayhi_http::{ClientError, ResponseInterceptor};
use std::sync::Arc;
use tracing::{info, warn};

/// Clears the session and sends the user to the login route on `401`
///
/// Runs for every call made through the client, login and register
/// included. All side effects happen before the caller sees the error.
pub struct SessionExpiry {
    auth: AuthStore,
    router: Arc<Router>,
    notifier: Arc<dyn Notifier>,
}

impl SessionExpiry {
    pub fn new(auth: AuthStore, router: Arc<Router>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            auth,
            router,
            notifier,
        }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn on_error(&self, error: &ClientError) {
        if error.status() != Some(StatusCode::UNAUTHORIZED) {
            return;
        }

        info!("Server rejected the session: {error}");
        self.auth.clear_auth();
        self.notifier.error(Notices::SESSION_EXPIRED);
        if let Err(e) = self.router.push(LOGIN_PATH) {
            warn!("Failed to navigate to login: {e}");
        }
    }
}
