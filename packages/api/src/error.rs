//! Error taxonomy for API calls.
//!
//! Three failure shapes, mirroring what callers actually have to handle:
//! transport failures propagate the underlying error, non-2xx responses carry
//! a best-effort human-readable message, and a success status with an empty
//! body is its own case so the session layer can fall back to a cached
//! payload.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure before any HTTP status was received.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP response.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx/304 response with no body. Conditional responses (304) sometimes
    /// arrive bodyless; callers may substitute a cached payload.
    #[error("empty response body")]
    EmptyBody,

    /// Body that could not be decoded as the expected type.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            message: error_message(status, body),
        }
    }

    /// Whether this error is the empty-body case.
    pub fn is_empty_body(&self) -> bool {
        matches!(self, ApiError::EmptyBody)
    }
}

/// Extract a human-readable message from an error response.
///
/// Prefers the JSON body's `message` field; falls back to the HTTP status
/// text, then to the bare status code.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json_body() {
        let msg = error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"success":false,"message":"Invalid credentials"}"#,
        );
        assert_eq!(msg, "Invalid credentials");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_text() {
        let msg = error_message(StatusCode::BAD_GATEWAY, "<html>nginx</html>");
        assert_eq!(msg, "Bad Gateway");
    }

    #[test]
    fn test_json_without_message_falls_back() {
        let msg = error_message(StatusCode::NOT_FOUND, r#"{"success":false}"#);
        assert_eq!(msg, "Not Found");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let msg = error_message(StatusCode::FORBIDDEN, r#"{"message":""}"#);
        assert_eq!(msg, "Forbidden");
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::status(StatusCode::UNAUTHORIZED, r#"{"message":"Not authorized"}"#);
        assert_eq!(err.to_string(), "Not authorized");
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
    }
}
