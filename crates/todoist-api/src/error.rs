//! Error types for the Todoist API client.

use std::fmt;

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the Todoist API or the transport underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Authentication failure (401/403).
    Auth { message: String },
    /// Rate limit exceeded (429).
    RateLimit { retry_after: Option<u64> },
    /// Resource not found (404).
    NotFound { resource: String, id: String },
    /// Request rejected by the API (400).
    Validation {
        field: Option<String>,
        message: String,
    },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            ApiError::NotFound { resource, id } => write!(f, "{} not found: {}", resource, id),
            ApiError::Validation { field, message } => match field {
                Some(name) => write!(f, "Validation error on {}: {}", name, message),
                None => write!(f, "Validation error: {}", message),
            },
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimit { .. } | ApiError::Network { .. })
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            ApiError::RateLimit { .. } => 4,
            _ => 2,
        }
    }
}

/// Top-level error type for the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The API or the network failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(ApiError::Network {
            message: err.to_string(),
        })
    }
}

impl Error {
    /// Returns true if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound { .. }))
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) => api.exit_code(),
            Error::Json(_) | Error::Query(_) => 2,
        }
    }
}
