//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`repolist_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: repolist_ghapi_interface::ApiError,
    },
}

impl From<repolist_ghapi_interface::ApiError> for DomainError {
    fn from(e: repolist_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
