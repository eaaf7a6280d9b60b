/*
[INPUT]:  Error sources (transport, backend status, serialization, config)
[OUTPUT]: Structured error type shared by every endpoint module
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the SOC console adapter
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failed without a reqwest error (custom or mock transports)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Backend answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading a local file for upload failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Api { status, .. } => Some(*status),
            ConsoleError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Check if error indicates missing or rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Check if the backend reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ConsoleError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for SOC console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(ConsoleError::api_error(StatusCode::UNAUTHORIZED, "Unauthorized").is_auth_error());
        assert!(ConsoleError::api_error(StatusCode::FORBIDDEN, "nope").is_auth_error());
        assert!(!ConsoleError::Connection("reset".to_string()).is_auth_error());
    }

    #[test]
    fn test_error_is_not_found() {
        let err = ConsoleError::api_error(StatusCode::NOT_FOUND, "No connectors found");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(!ConsoleError::Config("x".to_string()).is_not_found());
    }

    #[test]
    fn test_api_error_creation() {
        let err = ConsoleError::api_error(StatusCode::BAD_REQUEST, "Only .yaml files are allowed.");
        match err {
            ConsoleError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Only .yaml files are allowed.");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = ConsoleError::api_error(StatusCode::NOT_FOUND, "No connector found for ID: 7");
        assert_eq!(
            err.to_string(),
            "API error (status 404): No connector found for ID: 7"
        );
    }
}
