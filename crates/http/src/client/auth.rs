//! Authentication API client methods

use super::{ApiClient, error::ClientResult};
use crate::types::{Credentials, LoginResponse, MessageResponse, UserInfo};
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for a token
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<LoginResponse> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute(request).await
    }

    /// Create an account
    pub async fn register(&self, credentials: &Credentials) -> ClientResult<MessageResponse> {
        let request = self.request(Method::POST, "/auth/register").json(credentials);
        self.execute(request).await
    }

    /// Get current user info (requires authentication)
    pub async fn get_user_info(&self) -> ClientResult<UserInfo> {
        let request = self.request(Method::GET, "/auth/user");
        self.execute(request).await
    }
}
