//! Client error types
//!
//! Every failure is normalised to a single human-readable message. The
//! transport error that caused it is not kept, only its text.

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when nothing better is available
pub const FALLBACK_MESSAGE: &str = "request failed";

/// Standard result type for client calls
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Client error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Network, timeout or body read failure
    #[error("{message}")]
    Transport { message: String },

    /// Server answered with a non-success status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Server answered 401
    #[error("{message}")]
    Unauthorized { message: String },

    /// Success body did not match the expected payload type
    #[error("{message}")]
    Decode { message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = non_empty(message.into());
        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    /// Create error from a transport failure, keeping only its text
    pub fn transport(err: &reqwest::Error) -> Self {
        Self::Transport {
            message: non_empty(err.to_string()),
        }
    }

    /// Create error from a payload that failed to decode
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::Decode {
            message: non_empty(format!("Invalid response payload: {err}")),
        }
    }

    /// HTTP status that caused the error, if the server answered at all
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Status { message, .. }
            | Self::Unauthorized { message }
            | Self::Decode { message }
            | Self::Configuration(message) => message,
        }
    }

    /// Whether the session is no longer authorized
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(&err)
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_401() {
        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, "expired");
        assert!(error.is_unauthorized());
        assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(error.to_string(), "expired");
    }

    #[test]
    fn test_display_is_the_message_alone() {
        let error = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.message(), "boom");
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_empty_message_falls_back() {
        let error = ClientError::from_status(StatusCode::BAD_GATEWAY, "  ");
        assert_eq!(error.message(), FALLBACK_MESSAGE);
    }
}
