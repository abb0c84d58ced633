//! Error types for catalog backend calls.

use std::fmt;
use thiserror::Error;

/// Backend endpoints consumed by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Seed,
    Categories,
    Products,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Seed => "/api/seed",
            Endpoint::Categories => "/api/categories",
            Endpoint::Products => "/api/products",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors that can occur talking to the catalog backend.
///
/// All of them are transient from the view's point of view: callers fall
/// back to an empty or previous value and log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be joined with an endpoint path
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (connect, reset, aborted body)
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Body was not the expected JSON
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            endpoint: Endpoint::Products,
            status: 503,
        };
        assert_eq!(err.to_string(), "/api/products returned HTTP 503");
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::Decode {
            endpoint: Endpoint::Categories,
            source,
        };
        assert!(err.to_string().starts_with("Failed to decode /api/categories response"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
