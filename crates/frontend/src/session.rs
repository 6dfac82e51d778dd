//! Session wiring
//!
//! A [`Session`] owns one auth store, one router and one API client, built
//! so that the client reads the store on every request and the router sees
//! every change the client makes to it.

use crate::auth::AuthStore;
use crate::client::create_api_client;
use crate::notify::Notifier;
use crate::router::{HOME_PATH, LOGIN_PATH, NavigationError, Route, Router};
use sayhi_core::SharedStore;
use sayhi_http::client::DEFAULT_TIMEOUT;
use sayhi_http::types::{Credentials, LoginResponse, MessageResponse};
use sayhi_http::{ApiClient, ClientError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("Login response did not include a token")]
    MissingToken,
}

/// Where the backend lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl SessionOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Auth store, router and API client wired together
pub struct Session {
    auth: AuthStore,
    router: Arc<Router>,
    notifier: Arc<dyn Notifier>,
    api: ApiClient,
}

impl Session {
    /// Open the session, restoring persisted credentials from `storage`
    pub fn open(
        options: &SessionOptions,
        storage: SharedStore,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let auth = AuthStore::open(storage);
        let router = Arc::new(Router::new(auth.clone(), notifier.clone()));
        let api = create_api_client(
            &options.base_url,
            options.timeout,
            &auth,
            &router,
            &notifier,
        )?;

        Ok(Self {
            auth,
            router,
            notifier,
            api,
        })
    }

    pub const fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Log in, store the returned credentials and go to the editor
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, SessionError> {
        let response = self.api.login(credentials).await?;
        if response.token.is_empty() {
            return Err(SessionError::MissingToken);
        }

        self.auth.set_auth(&response.token, &response.username);
        if !response.message.is_empty() {
            self.notifier.info(&response.message);
        }
        info!(username = %response.username, "Logged in");

        self.router.push(HOME_PATH)?;
        Ok(response)
    }

    /// Create an account; does not log in
    pub async fn register(&self, credentials: &Credentials) -> Result<MessageResponse, SessionError> {
        let response = self.api.register(credentials).await?;
        if !response.message.is_empty() {
            self.notifier.info(&response.message);
        }
        Ok(response)
    }

    /// Drop the credentials and go to the login route
    pub fn logout(&self) -> Result<&'static Route, NavigationError> {
        self.auth.clear_auth();
        info!("Logged out");
        self.router.push(LOGIN_PATH)
    }
}
