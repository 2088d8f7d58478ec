use async_trait::async_trait;
use repolist_ghapi_interface::{
    types::{GhBranch, GhRepository},
    RepositoryListParams,
};
use repolist_models::{BranchDto, RepositoryDto};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetUserRepositoriesInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        user_name: &str,
        access_token: &str,
        params: &RepositoryListParams,
    ) -> Result<Vec<RepositoryDto>>;
}

/// List the non-forked repositories of a user, with their branches.
///
/// Branches are fetched one repository at a time; the first failure aborts
/// the whole listing.
#[derive(Component)]
#[shaku(interface = GetUserRepositoriesInterface)]
pub(crate) struct GetUserRepositories;

#[async_trait]
impl GetUserRepositoriesInterface for GetUserRepositories {
    #[tracing::instrument(skip(self, ctx, access_token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        user_name: &str,
        access_token: &str,
        params: &RepositoryListParams,
    ) -> Result<Vec<RepositoryDto>> {
        let repositories = ctx
            .api_service
            .user_repositories_list(user_name, access_token, params)
            .await?;

        let mut output = vec![];
        for repository in repositories.into_iter().filter(|r| !r.fork) {
            let branches = ctx
                .api_service
                .repository_branches_list(user_name, &repository.name, access_token)
                .await?;

            output.push(build_repository_dto(repository, branches));
        }

        info!(
            user_name = user_name,
            repositories_count = output.len(),
            message = "Fetched user repositories"
        );

        Ok(output)
    }
}

fn build_repository_dto(repository: GhRepository, branches: Vec<GhBranch>) -> RepositoryDto {
    RepositoryDto {
        repository_name: repository.name,
        owner_login: repository.owner.login,
        branches: branches
            .into_iter()
            .map(|branch| BranchDto {
                branch_name: branch.name,
                sha: branch.commit.sha,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use mockall::{predicate, Sequence};
    use pretty_assertions::assert_eq;
    use repolist_ghapi_interface::{types::GhUser, ApiError};

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    fn repository(name: &str, fork: bool) -> GhRepository {
        GhRepository {
            name: name.into(),
            owner: GhUser {
                login: "userName".into(),
            },
            fork,
        }
    }

    #[tokio::test]
    async fn only_non_forked_repositories() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_user_repositories_list()
            .once()
            .withf(|user_name, access_token, params| {
                user_name == "userName"
                    && access_token == "accessToken"
                    && params.sort.as_deref() == Some("created")
                    && params.direction.as_deref() == Some("asc")
            })
            .return_once(|_, _, _| Ok(vec![repository("a", false), repository("b", true)]));
        ctx.api_service
            .expect_repository_branches_list()
            .once()
            .with(
                predicate::eq("userName"),
                predicate::eq("a"),
                predicate::eq("accessToken"),
            )
            .return_once(|_, _, _| {
                Ok(vec![
                    GhBranch::new("branchName", "sha"),
                    GhBranch::new("branchName2", "sha2"),
                ])
            });

        let output = GetUserRepositories
            .run(
                &ctx.as_context(),
                "userName",
                "accessToken",
                &RepositoryListParams::new(Some("created".into()), Some("asc".into())),
            )
            .await
            .unwrap();

        assert_eq!(
            output,
            vec![RepositoryDto {
                repository_name: "a".into(),
                owner_login: "userName".into(),
                branches: vec![
                    BranchDto {
                        branch_name: "branchName".into(),
                        sha: "sha".into()
                    },
                    BranchDto {
                        branch_name: "branchName2".into(),
                        sha: "sha2".into()
                    }
                ]
            }]
        );
    }

    #[tokio::test]
    async fn branches_are_fetched_in_order() {
        let mut ctx = CoreContextTest::new();
        let mut seq = Sequence::new();

        ctx.api_service
            .expect_user_repositories_list()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _, _| {
                Ok(vec![
                    repository("first", false),
                    repository("forked", true),
                    repository("second", false),
                ])
            });
        ctx.api_service
            .expect_repository_branches_list()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, repository_name, _| repository_name == "first")
            .return_once(|_, _, _| Ok(vec![GhBranch::new("main", "1")]));
        ctx.api_service
            .expect_repository_branches_list()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, repository_name, _| repository_name == "second")
            .return_once(|_, _, _| Ok(vec![]));

        let output = GetUserRepositories
            .run(
                &ctx.as_context(),
                "userName",
                "",
                &RepositoryListParams::default(),
            )
            .await
            .unwrap();

        let names: Vec<_> = output.iter().map(|r| r.repository_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(output[1].branches.is_empty());
    }

    #[tokio::test]
    async fn repository_listing_failure_is_propagated() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_user_repositories_list()
            .once()
            .return_once(|user_name, _, _| {
                Err(ApiError::NotFound {
                    user: user_name.into(),
                })
            });
        ctx.api_service.expect_repository_branches_list().never();

        let error = GetUserRepositories
            .run(
                &ctx.as_context(),
                "ghost",
                "",
                &RepositoryListParams::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            DomainError::ApiError {
                source: ApiError::NotFound { user }
            } if user == "ghost"
        ));
    }

    #[tokio::test]
    async fn branch_failure_aborts_everything() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_user_repositories_list()
            .once()
            .return_once(|_, _, _| {
                Ok(vec![
                    repository("a", false),
                    repository("b", false),
                    repository("c", false),
                ])
            });
        ctx.api_service
            .expect_repository_branches_list()
            .withf(|_, repository_name, _| repository_name == "a")
            .once()
            .return_once(|_, _, _| Ok(vec![GhBranch::new("main", "1")]));
        ctx.api_service
            .expect_repository_branches_list()
            .withf(|_, repository_name, _| repository_name == "b")
            .once()
            .return_once(|_, _, _| {
                Err(ApiError::UpstreamError {
                    status: 502,
                    message: "Bad Gateway".into(),
                })
            });
        ctx.api_service
            .expect_repository_branches_list()
            .withf(|_, repository_name, _| repository_name == "c")
            .never();

        let error = GetUserRepositories
            .run(
                &ctx.as_context(),
                "userName",
                "",
                &RepositoryListParams::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            DomainError::ApiError {
                source: ApiError::UpstreamError { status: 502, .. }
            }
        ));
    }

    #[tokio::test]
    async fn only_forks() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_user_repositories_list()
            .once()
            .return_once(|_, _, _| Ok(vec![repository("b", true)]));
        ctx.api_service.expect_repository_branches_list().never();

        let output = GetUserRepositories
            .run(
                &ctx.as_context(),
                "userName",
                "",
                &RepositoryListParams::default(),
            )
            .await
            .unwrap();

        assert!(output.is_empty());
    }
}
