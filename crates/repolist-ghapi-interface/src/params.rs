//! Repository listing parameters.

use std::fmt;

use repolist_config::ApiGitHubConfig;

use crate::{ApiError, Result};

/// Optional query parameter of the repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParameter {
    /// `sort` parameter.
    Sort,
    /// `direction` parameter.
    Direction,
}

impl QueryParameter {
    /// Query key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Direction => "direction",
        }
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sorting options of the repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryListParams {
    /// Sort key.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: Option<String>,
}

impl RepositoryListParams {
    /// Creates new parameters.
    pub fn new(sort: Option<String>, direction: Option<String>) -> Self {
        Self { sort, direction }
    }

    /// Check values against the configured allow-lists.
    ///
    /// Returns the query pairs to send, `sort` first. Empty values are skipped.
    pub fn to_query(&self, config: &ApiGitHubConfig) -> Result<Vec<(&'static str, String)>> {
        let mut query = vec![];

        for (parameter, value, allowed) in [
            (QueryParameter::Sort, &self.sort, &config.allowed_sorts),
            (
                QueryParameter::Direction,
                &self.direction,
                &config.allowed_directions,
            ),
        ] {
            let value = match value.as_deref() {
                None | Some("") => continue,
                Some(v) => v,
            };

            if !allowed.iter().any(|a| a == value) {
                return Err(ApiError::InvalidParameter {
                    parameter,
                    value: value.into(),
                });
            }

            query.push((parameter.key(), value.to_string()));
        }

        Ok(query)
    }
}
