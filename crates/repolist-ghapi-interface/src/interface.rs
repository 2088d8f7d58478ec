use async_trait::async_trait;

use crate::{
    types::{GhBranch, GhRepository},
    RepositoryListParams, Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List repositories of a user.
    ///
    /// Sorting parameters are validated before any request is sent.
    async fn user_repositories_list(
        &self,
        user_name: &str,
        access_token: &str,
        params: &RepositoryListParams,
    ) -> Result<Vec<GhRepository>>;
    /// List branches of a user repository.
    async fn repository_branches_list(
        &self,
        user_name: &str,
        repository_name: &str,
        access_token: &str,
    ) -> Result<Vec<GhBranch>>;
}
