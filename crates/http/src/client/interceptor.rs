//! Request and response interceptors
//!
//! The client holds two ordered lists. Request interceptors see every
//! outgoing request builder in registration order; response interceptors see
//! every failure, in registration order, before it is returned to the caller.

use super::error::ClientError;
use reqwest::{RequestBuilder, header};

/// Transforms every outgoing request
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Reacts to every failed call before the caller sees it
pub trait ResponseInterceptor: Send + Sync {
    fn on_error(&self, error: &ClientError);
}

/// Attaches a fixed bearer token
///
/// For callers holding a long-lived credential. Session-based callers read
/// the token from their auth state on every request instead.
#[derive(Clone)]
pub struct StaticBearer {
    token: String,
}

impl StaticBearer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestInterceptor for StaticBearer {
    fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(header::AUTHORIZATION, bearer(&self.token))
    }
}

/// `Authorization` header value for a token
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
