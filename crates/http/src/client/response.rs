//! Response stage helpers: envelope stripping and failure messages

use reqwest::StatusCode;
use serde_json::Value;

/// Member carrying the payload inside the response envelope
const DATA_FIELD: &str = "data";
/// Member carrying the server's error message
const ERROR_FIELD: &str = "error";

/// Extract the payload from a success body
///
/// An empty body is `null`. A JSON object with a `data` member is an
/// envelope and yields that member; anything else is the payload itself.
pub fn unwrap_payload(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(body)? {
        Value::Object(mut object) if object.contains_key(DATA_FIELD) => {
            Ok(object.remove(DATA_FIELD).unwrap_or(Value::Null))
        }
        other => Ok(other),
    }
}

/// Message for a failed response
///
/// The server's structured `error` field wins; otherwise the status line.
pub fn failure_message(status: StatusCode, body: &[u8]) -> String {
    server_error(body)
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

fn server_error(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get(ERROR_FIELD)?
        .as_str()
        .filter(|message| !message.trim().is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_is_stripped() {
        let payload = unwrap_payload(br#"{"data": {"id": 1}}"#).unwrap();
        assert_eq!(payload, json!({"id": 1}));
    }

    #[test]
    fn test_bare_body_is_the_payload() {
        let payload = unwrap_payload(br#"{"token": "t", "username": "u"}"#).unwrap();
        assert_eq!(payload, json!({"token": "t", "username": "u"}));
    }

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(unwrap_payload(b"").unwrap(), Value::Null);
        assert_eq!(unwrap_payload(b" \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(unwrap_payload(b"<html>").is_err());
    }

    #[test]
    fn test_server_error_field_wins() {
        let message = failure_message(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error": "boom"}"#);
        assert_eq!(message, "boom");
    }

    #[test]
    fn test_status_line_without_error_field() {
        let status = StatusCode::UNAUTHORIZED;
        assert_eq!(
            failure_message(status, b""),
            "Request failed with status code 401"
        );
        assert_eq!(
            failure_message(status, br#"{"error": ""}"#),
            "Request failed with status code 401"
        );
        assert_eq!(
            failure_message(status, br#"{"error": 42}"#),
            "Request failed with status code 401"
        );
    }
}
