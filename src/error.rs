//! Unified client-side error handling
//!
//! Every user-triggered action resolves to exactly one of these variants;
//! nothing is retried and no failure is fatal to the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected locally before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// The backend answered 401. The session has already been expired
    /// (token cleared, login redirect issued) by the time this surfaces.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-2xx status. `detail` carries the server's JSON
    /// `detail` field when one was present, else `HTTP <status>`.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// Connection-level failure (DNS, refused, timed out).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response arrived but did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Token persistence failed.
    #[error("credential storage: {0}")]
    Store(String),
}

impl ApiError {
    /// Status code of the underlying HTTP failure, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
