//! Error types for the blog API client.
//!
//! Every failure is classified so that logs carry a stable `error_type`
//! while the UI only ever shows the static per-resource alert.

use thiserror::Error;

/// Errors that can occur while fetching from the content service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL cannot carry path segments or a segment was rejected
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Server unreachable or the connection dropped
    #[error("Connection failed to '{url}': {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Server answered with a non-2xx status
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Classify a transport error from reqwest.
    pub(crate) fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::ConnectionError {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Client(_) => "client_error",
            ApiError::ConnectionError { .. } => "connection_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "http_status",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_type_and_message() {
        let err = ApiError::Status {
            url: "http://x/homePosts".to_string(),
            status: 503,
        };
        assert_eq!(err.error_type(), "http_status");
        assert_eq!(err.to_string(), "'http://x/homePosts' returned HTTP 503");
    }

    #[test]
    fn decode_error_type() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ApiError::Decode {
            url: "http://x/post/1".to_string(),
            source,
        };
        assert_eq!(err.error_type(), "decode_error");
    }
}
