use serde_json::Value;
use thiserror::Error;

/// Shown when the server did not explain what went wrong.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Server error {status}")]
    Status {
        status: u16,
        /// Message extracted from the server's error payload, if any.
        message: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl TransportError {
    /// Build a status error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        TransportError::Status {
            status,
            message: extract_server_message(body),
        }
    }

    /// Text suitable for a modal or banner.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Pull the human-readable message out of the server error payload.
///
/// The backend answers `{"message": "..."}` for domain errors and
/// `{"message": {"field": "..."}}` for bean-validation errors; in the latter
/// case the first field message is used.
pub fn extract_server_message(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    match payload.get("message")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Object(fields) => fields
            .values()
            .find_map(|v| v.as_str())
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_extracted() {
        let body = r#"{"status":409,"error":"Conflict","message":"Brand already has one Product with name: X"}"#;
        let err = TransportError::from_response(409, body);
        assert_eq!(
            err.user_message(),
            "Brand already has one Product with name: X"
        );
    }

    #[test]
    fn test_field_errors_take_first_message() {
        let body = r#"{"status":"BAD_REQUEST","message":{"price":"Price must be positive"}}"#;
        assert_eq!(
            extract_server_message(body).as_deref(),
            Some("Price must be positive")
        );
    }

    #[test]
    fn test_generic_message_fallback() {
        assert_eq!(
            TransportError::from_response(500, "<html>oops</html>").user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            TransportError::Network("offline".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(extract_server_message(r#"{"message":""}"#), None);
    }
}
