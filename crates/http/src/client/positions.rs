//! Position value client methods

use super::{ApiClient, error::ClientResult};
use crate::types::{
    MessageResponse, PositionListResponse, PositionValueRequest, PositionValuesResponse,
    SetPositionValuesRequest,
};
use reqwest::Method;

impl ApiClient {
    /// List the values of every position
    pub async fn get_all_positions(&self) -> ClientResult<PositionListResponse> {
        let request = self.request(Method::GET, "/positions");
        self.execute(request).await
    }

    /// List the values of one position
    pub async fn get_position_values(&self, position: &str) -> ClientResult<PositionValuesResponse> {
        let request = self.request(Method::GET, &format!("/positions/{position}"));
        self.execute(request).await
    }

    /// Add one value to a position
    pub async fn add_position_value(
        &self,
        value: &PositionValueRequest,
    ) -> ClientResult<MessageResponse> {
        let request = self.request(Method::POST, "/positions").json(value);
        self.execute(request).await
    }

    /// Replace every value of a position
    pub async fn set_position_values(
        &self,
        position: &str,
        values: Vec<String>,
    ) -> ClientResult<MessageResponse> {
        let request = self
            .request(Method::PUT, &format!("/positions/{position}"))
            .json(&SetPositionValuesRequest { values });
        self.execute(request).await
    }

    /// Remove one value from a position
    pub async fn delete_position_value(
        &self,
        position: &str,
        value: &str,
    ) -> ClientResult<MessageResponse> {
        let request = self
            .request(Method::DELETE, &format!("/positions/{position}"))
            .query(&[("value", value)]);
        self.execute(request).await
    }
}
