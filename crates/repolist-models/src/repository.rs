use serde::{Deserialize, Serialize};

/// Branch, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDto {
    pub branch_name: String,
    pub sha: String,
}

/// Non-forked repository with its branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDto {
    pub repository_name: String,
    pub owner_login: String,
    pub branches: Vec<BranchDto>,
}

/// Response envelope of the repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRepositoriesResponse {
    pub repositories: Vec<RepositoryDto>,
}

impl UserRepositoriesResponse {
    pub fn new(repositories: Vec<RepositoryDto>) -> Self {
        Self { repositories }
    }
}
