//! GitHub Api wrappers.

use async_trait::async_trait;
use repolist_config::Config;
use repolist_ghapi_github::GithubApiService;
use repolist_ghapi_interface::{
    types::{GhBranch, GhRepository},
    ApiService, RepositoryListParams, Result,
};

use crate::metrics::GITHUB_API_CALLS;

/// GitHub Api Service with metrics.
pub struct MetricsApiService {
    inner: GithubApiService,
}

impl MetricsApiService {
    /// Creates a new service.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            inner: GithubApiService::new(config)?,
        })
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn user_repositories_list(
        &self,
        user_name: &str,
        access_token: &str,
        params: &RepositoryListParams,
    ) -> Result<Vec<GhRepository>> {
        GITHUB_API_CALLS.inc();
        self.inner
            .user_repositories_list(user_name, access_token, params)
            .await
    }

    async fn repository_branches_list(
        &self,
        user_name: &str,
        repository_name: &str,
        access_token: &str,
    ) -> Result<Vec<GhBranch>> {
        GITHUB_API_CALLS.inc();
        self.inner
            .repository_branches_list(user_name, repository_name, access_token)
            .await
    }
}
