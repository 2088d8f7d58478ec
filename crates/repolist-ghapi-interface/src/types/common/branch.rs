use serde::{Deserialize, Serialize};

/// Commit reference of a branch head.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitRef {
    /// SHA.
    pub sha: String,
}

/// GitHub Branch.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhBranch {
    /// Name.
    pub name: String,
    /// Head commit.
    pub commit: GhCommitRef,
}

impl GhBranch {
    /// Creates a branch pointing to a commit.
    pub fn new<N: Into<String>, S: Into<String>>(name: N, sha: S) -> Self {
        Self {
            name: name.into(),
            commit: GhCommitRef { sha: sha.into() },
        }
    }
}
