//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use repolist_config::Config;
use repolist_ghapi_interface::{
    types::{GhBranch, GhRepository},
    ApiService, RepositoryListParams, Result,
};

/// Null API service.
///
/// Validates parameters like the real driver, then answers empty lists.
#[derive(Clone)]
pub struct NullApiService {
    config: Config,
}

impl NullApiService {
    /// Build a null API service.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self, _access_token), ret)]
    async fn user_repositories_list(
        &self,
        user_name: &str,
        _access_token: &str,
        params: &RepositoryListParams,
    ) -> Result<Vec<GhRepository>> {
        params.to_query(&self.config.api.github)?;
        Ok(vec![])
    }

    #[tracing::instrument(skip(self, _access_token), ret)]
    async fn repository_branches_list(
        &self,
        user_name: &str,
        repository_name: &str,
        _access_token: &str,
    ) -> Result<Vec<GhBranch>> {
        Ok(vec![])
    }
}
