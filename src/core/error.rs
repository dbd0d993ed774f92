//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ServiceError`] - Requests to the steganography service
//! - [`PlatformError`] - Browser capabilities (downloads, clipboard)

use thiserror::Error;

/// Errors talking to the steganography service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Failed to build the HTTP request or its multipart body
    #[error("Failed to create request: {0}")]
    RequestBuild(String),
    /// Network request failed (unreachable host, CORS, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response. `message` is the service's `{"error": ...}` text
    /// when the body could be parsed.
    #[error("HTTP error {status}")]
    Rejected { status: u16, message: Option<String> },
    /// Failed to read the response body
    #[error("Failed to read response")]
    ResponseRead,
    /// Response body had an unexpected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Message shown to the user.
    ///
    /// A structured rejection yields the service's own text; a rejection
    /// whose body couldn't be parsed yields `fallback`; every other error is
    /// described by its own text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(msg), ..
            } if !msg.is_empty() => msg.clone(),
            Self::Rejected { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors from browser capabilities behind [`Platform`](super::Platform).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Browser window or document not available
    #[error("Browser document not available")]
    NoDocument,
    /// Failed to build the download blob or its object URL
    #[error("Failed to prepare download: {0}")]
    Download(String),
    /// Clipboard API missing or write rejected
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_service_text() {
        let err = ServiceError::Rejected {
            status: 400,
            message: Some("bad password".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "bad password");
    }

    #[test]
    fn test_user_message_falls_back_when_unparsed() {
        let err = ServiceError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("fallback"), "fallback");

        let empty = ServiceError::Rejected {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_user_message_for_transport_errors() {
        let err = ServiceError::Network("connection refused".to_string());
        assert_eq!(err.user_message("fallback"), "Network error: connection refused");
        assert_eq!(
            ServiceError::Decode("missing field `data`".to_string()).user_message("x"),
            "Invalid response: missing field `data`"
        );
    }
}
