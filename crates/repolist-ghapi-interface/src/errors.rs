//! API errors.

use thiserror::Error;

use crate::QueryParameter;

const NOT_FOUND_STATUS: u16 = 404;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query parameter outside of its allow-list, raised before any network call.
    #[error("Invalid value '{value}' for parameter '{parameter}'")]
    InvalidParameter {
        parameter: QueryParameter,
        value: String,
    },

    /// Upstream answered 404.
    #[error("User or repository not found for user '{user}'")]
    NotFound { user: String },

    /// Any other upstream HTTP failure.
    #[error("{status}: {message}")]
    UpstreamError { status: u16, message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Map an upstream status code to an API error, `None` on success.
    pub fn from_upstream_status(user: &str, status: u16, message: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            NOT_FOUND_STATUS => Some(Self::NotFound { user: user.into() }),
            _ => Some(Self::UpstreamError {
                status,
                message: message.into(),
            }),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
