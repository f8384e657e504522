use thiserror::Error;

/// Failure of an outbound call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response payload: {0}")]
    Decode(String),

    /// The call succeeded but carried nothing usable.
    #[error("service returned no result")]
    NoResult,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
