//! HTTP client error types

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// HTTP error status
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Request body could not be encoded
    #[error("Failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// True when no response was received (connection refused, DNS, timeout)
    pub fn is_transport(&self) -> bool {
        match self {
            HttpError::RequestFailed(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            HttpError::Timeout(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = HttpError::HttpStatus {
            status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 422 Unprocessable Entity: missing field");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_timeout_is_transport() {
        let err = HttpError::Timeout(std::time::Duration::from_secs(3));
        assert!(err.is_transport());
    }
}
