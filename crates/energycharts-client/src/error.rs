//! Error types for the energy-charts client

use thiserror::Error;

/// Errors that can occur while fetching price data
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("HTTP error! Status: {status}, Message: {body}")]
    Status {
        /// Response status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// A single attempt exceeded the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u128),

    /// Base URL or endpoint could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response payload violates the price series invariants
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClientError {
    /// Whether another attempt may succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            ClientError::Timeout(_) | ClientError::InvalidUrl(_) | ClientError::Validation(_)
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let status = ClientError::Status { status: 503, body: "busy".to_string() };
        assert!(status.is_retryable());
        assert!(!ClientError::Timeout(10_000).is_retryable());
        assert!(!ClientError::Validation("mismatch".to_string()).is_retryable());
    }

    #[test]
    fn test_status_message() {
        let err = ClientError::Status { status: 404, body: "no such zone".to_string() };
        assert_eq!(err.to_string(), "HTTP error! Status: 404, Message: no such zone");
    }
}
