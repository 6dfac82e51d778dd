//! Client configuration and initialization

use crate::auth::{AuthStore, SessionExpiry};
use crate::notify::Notifier;
use crate::router::Router;
use reqwest::{RequestBuilder, header};
use sayhi_http::client::interceptor::bearer;
use sayhi_http::{ApiClient, ClientResult, RequestInterceptor};
use std::sync::Arc;
use std::time::Duration;

/// Attaches the session token, read from the auth store on every request
pub struct BearerToken {
    auth: AuthStore,
}

impl BearerToken {
    pub const fn new(auth: AuthStore) -> Self {
        Self { auth }
    }
}

impl RequestInterceptor for BearerToken {
    fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.auth.token();
        if token.is_empty() {
            request
        } else {
            request.header(header::AUTHORIZATION, bearer(&token))
        }
    }
}

/// Build the API client with the session's request and response stages
pub fn create_api_client(
    base_url: &str,
    timeout: Duration,
    auth: &AuthStore,
    router: &Arc<Router>,
    notifier: &Arc<dyn Notifier>,
) -> ClientResult<ApiClient> {
    ApiClient::builder()
        .base_url(base_url)
        .timeout(timeout)
        .request_interceptor(Arc::new(BearerToken::new(auth.clone())))
        .response_interceptor(Arc::new(SessionExpiry::new(
            auth.clone(),
            router.clone(),
            notifier.clone(),
        )))
        .build()
}

/// Origin of the page the client runs in
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> String {
    gloo::utils::window()
        .location()
        .origin()
        .unwrap_or_default()
}
