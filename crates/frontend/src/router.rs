//! Route table and login guard
//!
//! Every navigation goes through [`Router::push`], which runs the guard
//! before the current location changes:
//!
//! 1. a route that requires auth, opened without a session, redirects to
//!    `/login` with a notice;
//! 2. `/login`, opened with a session, redirects to `/`;
//! 3. anything else is allowed.
//!
//! A redirect is a new navigation, so the guard runs again on its target.

use crate::auth::AuthStore;
use crate::config::Notices;
use crate::notify::Notifier;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::debug;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const CONFIG_PATH: &str = "/config";

/// A navigable location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// The application's routes
pub static ROUTES: [Route; 3] = [
    Route {
        path: LOGIN_PATH,
        name: "Login",
        requires_auth: false,
    },
    Route {
        path: HOME_PATH,
        name: "TemplateEditor",
        requires_auth: true,
    },
    Route {
        path: CONFIG_PATH,
        name: "PositionConfig",
        requires_auth: true,
    },
];

/// Outcome of the guard for one navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Too many redirects navigating to {0}")]
    RedirectLoop(String),
}

/// Decide whether `to` may be entered
pub fn guard(to: &Route, is_authenticated: bool) -> GuardDecision {
    if to.requires_auth && !is_authenticated {
        GuardDecision::Redirect(LOGIN_PATH)
    } else if to.path == LOGIN_PATH && is_authenticated {
        GuardDecision::Redirect(HOME_PATH)
    } else {
        GuardDecision::Allow
    }
}

/// Router over the static route table
pub struct Router {
    routes: &'static [Route],
    auth: AuthStore,
    notifier: Arc<dyn Notifier>,
    current: Mutex<Option<&'static Route>>,
}

impl Router {
    pub fn new(auth: AuthStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            routes: &ROUTES,
            auth,
            notifier,
            current: Mutex::new(None),
        }
    }

    /// Route matching `path`; query string and fragment are ignored
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.routes.iter().find(|route| route.path == path)
    }

    /// Run the guard for `to`, showing the login notice when it redirects there
    pub fn before_each(&self, to: &Route) -> GuardDecision {
        let decision = guard(to, self.auth.is_authenticated());
        if decision == GuardDecision::Redirect(LOGIN_PATH) {
            self.notifier.warning(Notices::LOGIN_REQUIRED);
        }
        decision
    }

    /// Navigate to `path`, following guard redirects, and return where it landed
    pub fn push(&self, path: &str) -> Result<&'static Route, NavigationError> {
        let mut target = self
            .resolve(path)
            .ok_or_else(|| NavigationError::NotFound(path.to_string()))?;

        // Each route can be visited at most once in a well-formed chain
        for _ in 0..=self.routes.len() {
            match self.before_each(target) {
                GuardDecision::Allow => {
                    debug!(path = target.path, name = target.name, "Navigated");
                    *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(target);
                    return Ok(target);
                }
                GuardDecision::Redirect(to) => {
                    debug!(from = target.path, to, "Navigation redirected");
                    target = self
                        .resolve(to)
                        .ok_or_else(|| NavigationError::NotFound(to.to_string()))?;
                }
            }
        }

        Err(NavigationError::RedirectLoop(path.to_string()))
    }

    /// Current route, `None` before the first navigation
    pub fn current(&self) -> Option<&'static Route> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }
}
