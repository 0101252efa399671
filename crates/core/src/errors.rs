//! Core error types for the weekgoals client.
//!
//! Transport-specific errors live in `weekgoals-api`; validation errors are
//! field-scoped and defined in the goals module. This module ties both into
//! the root error type.

use thiserror::Error;

use crate::goals::ValidationErrors;
use weekgoals_api::ApiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the weekgoals client.
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation failed; never reaches the network.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A direct API call failed.
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    /// A cache-mediated fetch failed. Carries the flattened message because
    /// cache states must be `Clone`.
    #[error("Cached request failed: {0}")]
    Cache(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
