use repolist_ghapi_interface::ApiError;

/// GitHub driver error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    /// Transport error.
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    /// Header value rejected by the HTTP stack.
    #[error("Invalid value for header {name}")]
    InvalidHeaderValue {
        name: &'static str,
        source: http::header::InvalidHeaderValue,
    },

    /// Configured root URL is not a valid URL.
    #[error("Invalid GitHub root URL: {source}")]
    InvalidRootUrl { source: url::ParseError },

    /// Configured root URL cannot carry a path.
    #[error("GitHub root URL '{url}' cannot carry a path")]
    CannotBeABase { url: String },

    /// Value that would not stay a single path segment.
    #[error("Invalid path segment '{value}'")]
    InvalidPathSegment { value: String },

    /// Unreadable response body.
    #[error("Could not decode upstream response: {source}")]
    JsonError { source: serde_json::Error },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(e: serde_json::Error) -> Self {
        GitHubError::JsonError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
