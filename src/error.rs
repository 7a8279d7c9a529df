//! Error Types
//!
//! Failures from the REST backend and from the creation form.

use serde::Deserialize;
use thiserror::Error;

use crate::models::TodoField;

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend call failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never got an HTTP response
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx response, with the server's `error` text when it sent one
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown to the user: the server message if present
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Build a status error from a non-2xx response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }
}

/// Backend error body: `{"error": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Creation form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("すべての項目を入力してください。")]
    MissingFields(Vec<TodoField>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_server_message() {
        let err = ApiError::from_status(500, r#"{"error":"duplicate key"}"#);
        assert_eq!(err, ApiError::Status { status: 500, message: Some("duplicate key".into()) });
        assert_eq!(err.user_message(), "duplicate key");
    }

    #[test]
    fn test_status_error_without_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "HTTP 502");

        let err = ApiError::from_status(400, r#"{"error":""}"#);
        assert_eq!(err.user_message(), "HTTP 400");
    }

    #[test]
    fn test_transport_message() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), "transport error: TypeError: Failed to fetch");
    }
}
