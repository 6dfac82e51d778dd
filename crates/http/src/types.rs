//! Wire types shared with the sayhi backend

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Character encoding used to count SMS length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "ASCII")]
    Ascii,
    Zawgyi,
    Unicode,
    Other,
}

/// How position values are combined into messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateMode {
    Sequential,
    Random,
}

/// Candidate values for each template position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionConfig {
    #[serde(default)]
    pub a: Vec<String>,
    #[serde(default)]
    pub b: Vec<String>,
    #[serde(default)]
    pub c: Vec<String>,
    #[serde(default)]
    pub d: Vec<String>,
}

/// Template generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    /// Template text; generated from the positions when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Encoding applied to every selected position (legacy form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    /// Per-position encodings
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub encodings: BTreeMap<String, Encoding>,
    pub generate_mode: GenerateMode,
    pub positions: PositionConfig,
    /// Position to speech group name or id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub speech_groups: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_positions: Vec<String>,
}

/// One generated message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub content: String,
    pub char_count: usize,
    pub is_exceeded: bool,
    pub exceeded_chars: usize,
}

/// Template generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub results: Vec<GeneratedResult>,
    pub total_count: usize,
    pub exceeded_count: usize,
}

/// All configured position values, keyed by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionListResponse {
    #[serde(default)]
    pub positions: BTreeMap<String, Vec<String>>,
}

/// Values configured for one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionValuesResponse {
    pub position: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Add a single value to a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionValueRequest {
    pub position: String,
    pub value: String,
}

/// Replace every value of a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPositionValuesRequest {
    pub values: Vec<String>,
}

/// Username and password, used for both login and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
}

/// Current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Named list of speeches usable as position values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub speeches: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create a speech group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechGroupRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub speeches: Vec<String>,
}

/// Partial speech group update; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechGroupUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speeches: Option<Vec<String>>,
}

/// Speech group listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechGroupListResponse {
    #[serde(default)]
    pub groups: Vec<SpeechGroup>,
    #[serde(default)]
    pub total: usize,
}

/// Backend liveness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
