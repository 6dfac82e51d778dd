//! Errors raised by storage backends and settings loading

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Storage file error: {0}")]
    Io(String),

    #[error("Malformed storage data: {0}")]
    Serialization(String),

    /// The backend refused a read or write (quota, permissions, private mode)
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl CoreError {
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    pub fn storage_error(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::Settings(err.to_string())
    }
}
