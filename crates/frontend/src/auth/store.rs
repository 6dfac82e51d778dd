//! Process-wide authentication state
//!
//! One [`AuthState`] lives behind every clone of an [`AuthStore`] handle, so
//! a mutation made through any handle is visible to all readers immediately.
//! The state is mirrored into persistent storage: read once when the store is
//! opened, written on every change. Changes made to storage by anyone else
//! afterwards are not picked up.

use crate::config::AuthConfig;
use sayhi_core::{MemoryStore, SharedStore};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// Authentication state
///
/// Empty strings mean absent. `is_authenticated` always equals
/// `!token.is_empty()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub token: String,
    pub username: String,
    pub is_authenticated: bool,
}

impl AuthState {
    fn new(token: String, username: String) -> Self {
        let is_authenticated = !token.is_empty();
        Self {
            token,
            username,
            is_authenticated,
        }
    }
}

/// Shared handle to the authentication state
#[derive(Clone)]
pub struct AuthStore {
    state: Arc<RwLock<AuthState>>,
    storage: SharedStore,
}

impl AuthStore {
    /// Open the store, loading any persisted credentials
    pub fn open(storage: SharedStore) -> Self {
        let token = storage.get(AuthConfig::TOKEN_KEY).unwrap_or_default();
        let username = storage.get(AuthConfig::USERNAME_KEY).unwrap_or_default();
        let state = AuthState::new(token, username);
        if state.is_authenticated {
            info!(username = %state.username, "Restored persisted session");
        }

        Self {
            state: Arc::new(RwLock::new(state)),
            storage,
        }
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStore::new()))
    }

    /// Record a successful login and persist it
    ///
    /// An empty token cannot describe a session, so it clears instead.
    pub fn set_auth(&self, token: impl Into<String>, username: impl Into<String>) {
        let token = token.into();
        if token.is_empty() {
            warn!("Refusing to store an empty token, clearing credentials instead");
            self.clear_auth();
            return;
        }
        let username = username.into();

        *self.state.write().unwrap_or_else(PoisonError::into_inner) =
            AuthState::new(token.clone(), username.clone());
        info!(%username, "Credentials stored");

        self.persist(AuthConfig::TOKEN_KEY, Some(&token));
        self.persist(AuthConfig::USERNAME_KEY, Some(&username));
    }

    /// Forget the session and remove it from storage
    pub fn clear_auth(&self) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = AuthState::default();
        info!("Credentials cleared");

        self.persist(AuthConfig::TOKEN_KEY, None);
        self.persist(AuthConfig::USERNAME_KEY, None);
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AuthState {
        self.read(AuthState::clone)
    }

    /// Current token, empty when logged out
    pub fn token(&self) -> String {
        self.read(|state| state.token.clone())
    }

    /// Current username, empty when logged out
    pub fn username(&self) -> String {
        self.read(|state| state.username.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|state| state.is_authenticated)
    }

    fn read<T>(&self, f: impl FnOnce(&AuthState) -> T) -> T {
        f(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    // Storage writes are fire-and-forget: a failure is logged, never retried.
    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        };
        if let Err(e) = result {
            warn!(key, "Failed to persist auth state: {e}");
        }
    }
}
