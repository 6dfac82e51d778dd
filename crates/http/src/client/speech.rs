//! Speech group client methods

use super::{ApiClient, error::ClientResult};
use crate::types::{
    MessageResponse, SpeechGroup, SpeechGroupListResponse, SpeechGroupRequest,
    SpeechGroupUpdateRequest,
};
use reqwest::Method;

impl ApiClient {
    pub async fn list_speech_groups(&self) -> ClientResult<SpeechGroupListResponse> {
        let request = self.request(Method::GET, "/speech-groups");
        self.execute(request).await
    }

    pub async fn get_speech_group(&self, id: i64) -> ClientResult<SpeechGroup> {
        let request = self.request(Method::GET, &format!("/speech-groups/{id}"));
        self.execute(request).await
    }

    pub async fn create_speech_group(
        &self,
        group: &SpeechGroupRequest,
    ) -> ClientResult<SpeechGroup> {
        let request = self.request(Method::POST, "/speech-groups").json(group);
        self.execute(request).await
    }

    /// Update the fields present in `update`
    pub async fn update_speech_group(
        &self,
        id: i64,
        update: &SpeechGroupUpdateRequest,
    ) -> ClientResult<SpeechGroup> {
        let request = self
            .request(Method::PUT, &format!("/speech-groups/{id}"))
            .json(update);
        self.execute(request).await
    }

    pub async fn delete_speech_group(&self, id: i64) -> ClientResult<MessageResponse> {
        let request = self.request(Method::DELETE, &format!("/speech-groups/{id}"));
        self.execute(request).await
    }
}
