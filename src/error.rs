//! Error types for the WeValu node
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Failures reported by the remote service are collapsed into [`Error::Api`];
//! no distinction is made between auth failures, rate limits or outages.

use thiserror::Error;

/// The main error type for the WeValu node
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Node Validation Errors
    // ============================================================================
    #[error("WeValu API: Unknown operation '{operation}'")]
    UnknownOperation { operation: String },

    #[error("WeValu API: Unknown resource '{resource}'")]
    UnknownResource { resource: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Remote API Errors
    // ============================================================================
    #[error("WeValu API: {message}")]
    Api { message: String },

    #[error("WeValu API: pagination stopped after {max_pages} full pages")]
    PaginationLimit { max_pages: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a remote API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Wrap a request failure as a remote API error, carrying the upstream message
    pub fn remote(err: Error) -> Self {
        match err {
            Error::Api { .. } | Error::PaginationLimit { .. } => err,
            other => Self::api(other.to_string()),
        }
    }

    /// Check if this error was raised locally before any request was made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidParameter { .. }
                | Error::UnknownOperation { .. }
                | Error::UnknownResource { .. }
                | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for the WeValu node
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::UnknownOperation {
            operation: "delete".to_string(),
        };
        assert_eq!(err.to_string(), "WeValu API: Unknown operation 'delete'");
    }

    #[test]
    fn test_remote_wraps_upstream_message() {
        let err = Error::remote(Error::http_status(401, "invalid key"));
        assert!(matches!(err, Error::Api { .. }));
        assert_eq!(err.to_string(), "WeValu API: HTTP 401: invalid key");
    }

    #[test]
    fn test_remote_does_not_double_wrap() {
        let err = Error::remote(Error::api("already wrapped"));
        assert_eq!(err.to_string(), "WeValu API: already wrapped");

        let err = Error::remote(Error::PaginationLimit { max_pages: 3 });
        assert!(matches!(err, Error::PaginationLimit { max_pages: 3 }));
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::UnknownOperation {
            operation: "x".to_string()
        }
        .is_validation());
        assert!(Error::missing_field("api_key").is_validation());
        assert!(Error::invalid_parameter("limit", "must be at least 1").is_validation());

        assert!(!Error::api("boom").is_validation());
        assert!(!Error::http_status(500, "").is_validation());
        assert!(!Error::Timeout { timeout_ms: 10 }.is_validation());
    }
}
