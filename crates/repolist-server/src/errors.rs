//! Server errors.

use actix_http::StatusCode;
use actix_web::{error::QueryPayloadError, ResponseError};
use repolist_core::DomainError;
use repolist_ghapi_interface::ApiError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Missing request header '{name}'")]
    MissingHeader { name: &'static str },

    #[error("Not acceptable representation")]
    NotAcceptable,

    #[error("Invalid query string,\n  caused by: {source}")]
    InvalidQuery { source: QueryPayloadError },

    #[error("Domain error,\n  caused by: {source}")]
    DomainError { source: DomainError },

    #[error("Metrics error,\n  caused by: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },
}

impl ServerError {
    /// Upstream API error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::DomainError {
                source: DomainError::ApiError { source },
            } => Some(source),
            _ => None,
        }
    }
}

impl From<DomainError> for ServerError {
    fn from(e: DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl From<prometheus::Error> for ServerError {
    fn from(e: prometheus::Error) -> Self {
        Self::MetricsError {
            source: Box::new(e),
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingHeader { .. } | Self::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            _ => match self.api_error() {
                Some(ApiError::NotFound { .. }) => StatusCode::NOT_FOUND,
                Some(ApiError::InvalidParameter { .. }) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Result alias for `ServerError`.
pub type Result<T, E = ServerError> = core::result::Result<T, E>;
