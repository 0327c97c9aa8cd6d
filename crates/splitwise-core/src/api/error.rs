use thiserror::Error;

use crate::auth::AuthError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authorization failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed request: code={code}, status={status}")]
    Status { code: u16, status: String },

    #[error("Invalid response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered 200 but reported an error in the body
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Status {
            code: status.as_u16(),
            status: status.to_string(),
        }
    }

    /// Status code for `Status` errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
