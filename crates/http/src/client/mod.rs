//! sayhi API client

pub mod auth;
pub mod error;
pub mod interceptor;
pub mod positions;
pub mod response;
pub mod speech;
pub mod template;

use crate::types::HealthResponse;
use error::{ClientError, ClientResult};
use interceptor::{RequestInterceptor, ResponseInterceptor, StaticBearer};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Path every API endpoint lives under
pub const API_BASE_PATH: &str = "/api";
/// Request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

const USER_AGENT: &str = concat!("sayhi-client/", env!("CARGO_PKG_VERSION"));

/// sayhi API client
///
/// Cheap to clone; clones share the connection pool and both interceptor
/// lists.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    request_stage: Arc<[Arc<dyn RequestInterceptor>]>,
    response_stage: Arc<[Arc<dyn ResponseInterceptor>]>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{API_BASE_PATH}{path}", self.base_url)
    }

    /// Create a request builder for an API path, run through the request stage
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, self.api_url(path))
    }

    fn request_url(&self, method: Method, url: String) -> RequestBuilder {
        debug!(%method, %url, "Preparing request");
        let request = self.client.request(method, url);
        self.request_stage
            .iter()
            .fold(request, |request, interceptor| interceptor.on_request(request))
    }

    /// Send a request and run the response stage
    ///
    /// On success the envelope is stripped and the payload decoded. On failure
    /// every response interceptor sees the error before it is returned.
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        match self.dispatch(request).await {
            Ok(payload) => Ok(payload),
            Err(error) => {
                debug!(status = ?error.status(), "Request failed: {error}");
                for interceptor in self.response_stage.iter() {
                    interceptor.on_error(&error);
                }
                Err(error)
            }
        }
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let payload = response::unwrap_payload(&body).map_err(|e| ClientError::decode(&e))?;
            serde_json::from_value(payload).map_err(|e| ClientError::decode(&e))
        } else {
            Err(ClientError::from_status(
                status,
                response::failure_message(status, &body),
            ))
        }
    }

    /// Check that the backend is up
    ///
    /// Served at the origin root rather than under the API base path.
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let request = self.request_url(Method::GET, format!("{}/health", self.base_url));
        self.execute(request).await
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    request_stage: Vec<Arc<dyn RequestInterceptor>>,
    response_stage: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Set the backend origin; the API base path is appended per request
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Attach a fixed bearer token to every request
    #[must_use]
    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.request_interceptor(Arc::new(StaticBearer::new(token)))
    }

    /// Append a request interceptor
    #[must_use]
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_stage.push(interceptor);
        self
    }

    /// Append a response interceptor
    #[must_use]
    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_stage.push(interceptor);
        self
    }

    /// Build the client
    pub fn build(self) -> ClientResult<ApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(CONTENT_TYPE_JSON),
        );

        let mut client_builder = ClientBuilder::new().default_headers(headers);

        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder.timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        client_builder =
            client_builder.user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        let client = client_builder
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(ApiClient {
            client,
            base_url,
            request_stage: self.request_stage.into(),
            response_stage: self.response_stage.into(),
        })
    }
}
