//! Error types for remote API calls.

use thiserror::Error;

/// Errors produced by the goals API client.
///
/// `Network` covers transport failures, `Status` a non-success HTTP status,
/// `Parse` a body that is not the JSON we expect, and `MissingData` a valid
/// JSON body without the expected shape.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {path} failed: {message}")]
    Network { path: String, message: String },

    #[error("Server returned status {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("Failed to parse response from {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Response from {path} is missing expected data: {message}")]
    MissingData { path: String, message: String },
}

impl ApiError {
    /// Classifies a reqwest error for the given endpoint path.
    pub(crate) fn from_reqwest(path: &str, err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse {
                path: path.to_string(),
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            }
        } else {
            ApiError::Network {
                path: path.to_string(),
                message: err.to_string(),
            }
        }
    }
}
