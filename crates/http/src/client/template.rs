//! Template generation client methods

use super::{ApiClient, error::ClientResult};
use crate::types::{GenerateResponse, TemplateRequest};
use reqwest::Method;

impl ApiClient {
    /// Generate message content from a template and position values
    pub async fn generate_template(
        &self,
        request: &TemplateRequest,
    ) -> ClientResult<GenerateResponse> {
        let request = self
            .request(Method::POST, "/template/generate")
            .json(request);
        self.execute(request).await
    }
}
