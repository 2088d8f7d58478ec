//! GitHub adapter

use async_trait::async_trait;
use repolist_config::Config;
use repolist_ghapi_interface::{
    types::{GhBranch, GhRepository},
    ApiError, ApiService, RepositoryListParams, Result,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use url::Url;

use crate::{
    auth::{
        build_request_headers, build_user_repo_branches_url, build_user_repos_url,
        get_client_builder,
    },
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Result<Self> {
        let client = get_client_builder(&config)
            .build()
            .map_err(GitHubError::from)?;

        Ok(Self { config, client })
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        user_name: &str,
        access_token: &str,
    ) -> Result<Vec<T>> {
        let headers = build_request_headers(&self.config, user_name, access_token)?;

        let mut request = self.client.get(url.clone()).headers(headers);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(GitHubError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(GitHubError::from)?;

        if let Some(error) = ApiError::from_upstream_status(
            user_name,
            status.as_u16(),
            &upstream_message(status, &body),
        ) {
            match &error {
                ApiError::NotFound { .. } => {
                    warn!(url = %url, "User or repository not found during request")
                }
                _ => warn!(
                    url = %url,
                    status = status.as_u16(),
                    "Unexpected error occurred during request"
                ),
            }

            return Err(error);
        }

        info!(url = %url, "Fetching data succeeded");
        Ok(parse_list(&body)?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self, access_token))]
    async fn user_repositories_list(
        &self,
        user_name: &str,
        access_token: &str,
        params: &RepositoryListParams,
    ) -> Result<Vec<GhRepository>> {
        let query = params.to_query(&self.config.api.github)?;

        let url = build_user_repos_url(&self.config, user_name)
            .map_err(|e| path_error(user_name, e))?;

        self.fetch_list(
            url,
            &query,
            user_name,
            access_token,
        )
        .await
    }

    #[tracing::instrument(skip(self, access_token))]
    async fn repository_branches_list(
        &self,
        user_name: &str,
        repository_name: &str,
        access_token: &str,
    ) -> Result<Vec<GhBranch>> {
        let url = build_user_repo_branches_url(&self.config, user_name, repository_name)
            .map_err(|e| path_error(user_name, e))?;

        self.fetch_list(
            url,
            &[],
            user_name,
            access_token,
        )
        .await
    }
}

/// A name that cannot be a single path segment matches no upstream resource.
fn path_error(user_name: &str, error: GitHubError) -> ApiError {
    match error {
        GitHubError::InvalidPathSegment { .. } => ApiError::NotFound {
            user: user_name.into(),
        },
        e => e.into(),
    }
}

/// Upstream body, or the status reason when the body is empty.
fn upstream_message(status: StatusCode, body: &[u8]) -> String {
    if body.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}

/// An empty or `null` body is an empty list.
fn parse_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, GitHubError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(vec![]);
    }

    let items: Option<Vec<T>> = serde_json::from_slice(body)?;
    Ok(items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use repolist_ghapi_interface::{types::GhUser, QueryParameter};

    use super::*;

    const REPOSITORIES_BODY: &str = r#"[
        { "name": "repositoryName", "owner": { "login": "userName" }, "fork": false }
    ]"#;

    fn arrange_service(server: &Server) -> GithubApiService {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = server.url();
        GithubApiService::new(config).unwrap()
    }

    fn params(sort: Option<&str>, direction: Option<&str>) -> RepositoryListParams {
        RepositoryListParams::new(sort.map(Into::into), direction.map(Into::into))
    }

    #[tokio::test]
    async fn list_repositories() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/userName/repos")
            .match_query(Matcher::Missing)
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "userName")
            .match_header("authorization", "Bearer accessToken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPOSITORIES_BODY)
            .create_async()
            .await;

        let repositories = arrange_service(&server)
            .user_repositories_list("userName", "accessToken", &params(None, None))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            repositories,
            vec![GhRepository {
                name: "repositoryName".into(),
                owner: GhUser {
                    login: "userName".into()
                },
                fork: false
            }]
        );
    }

    #[tokio::test]
    async fn list_repositories_without_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/userName/repos")
            .match_header("authorization", Matcher::Missing)
            .match_header("user-agent", "userName")
            .with_status(200)
            .with_body(REPOSITORIES_BODY)
            .create_async()
            .await;

        let repositories = arrange_service(&server)
            .user_repositories_list("userName", "", &params(None, None))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(repositories.len(), 1);
    }

    #[tokio::test]
    async fn list_repositories_with_sort_and_direction() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/userName/repos")
            .match_query(Matcher::Exact("sort=created&direction=asc".into()))
            .with_status(200)
            .with_body(REPOSITORIES_BODY)
            .create_async()
            .await;

        let repositories = arrange_service(&server)
            .user_repositories_list("userName", "accessToken", &params(Some("created"), Some("asc")))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(repositories.len(), 1);
    }

    #[tokio::test]
    async fn list_repositories_empty_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/userName/repos")
            .with_status(200)
            .create_async()
            .await;

        let repositories = arrange_service(&server)
            .user_repositories_list("userName", "accessToken", &params(None, None))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn list_repositories_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/userName/repos")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let error = arrange_service(&server)
            .user_repositories_list("userName", "accessToken", &params(None, None))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::NotFound { user } if user == "userName"));
    }

    #[tokio::test]
    async fn list_repositories_upstream_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/userName/repos")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let error = arrange_service(&server)
            .user_repositories_list("userName", "accessToken", &params(None, None))
            .await
            .unwrap_err();

        match error {
            ApiError::UpstreamError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            e => panic!("unexpected error: {e:?}"),
        }
    }

    #[tokio::test]
    async fn list_repositories_invalid_sort_sends_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let error = arrange_service(&server)
            .user_repositories_list("userName", "accessToken", &params(Some("invalid_sort"), None))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            error,
            ApiError::InvalidParameter {
                parameter: QueryParameter::Sort,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn list_repositories_invalid_direction_sends_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let error = arrange_service(&server)
            .user_repositories_list(
                "userName",
                "accessToken",
                &params(Some("full_name"), Some("invalidDirection")),
            )
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            error,
            ApiError::InvalidParameter {
                parameter: QueryParameter::Direction,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn list_repositories_user_name_stays_in_its_segment() {
        let mut server = Server::new_async().await;
        let other_endpoint = server
            .mock("GET", "/orgs/acme/repos")
            .expect(0)
            .create_async()
            .await;
        let encoded = server
            .mock(
                "GET",
                Matcher::Regex(r"^/users/\.\.%2Forgs%2Facme/repos$".into()),
            )
            .with_status(404)
            .create_async()
            .await;

        let error = arrange_service(&server)
            .user_repositories_list("../orgs/acme", "accessToken", &params(None, None))
            .await
            .unwrap_err();

        other_endpoint.assert_async().await;
        encoded.assert_async().await;
        assert!(matches!(error, ApiError::NotFound { user } if user == "../orgs/acme"));
    }

    #[tokio::test]
    async fn list_dot_segments_send_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let service = arrange_service(&server);

        let error = service
            .user_repositories_list("..", "accessToken", &params(None, None))
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::NotFound { user } if user == ".."));

        let error = service
            .repository_branches_list("userName", ".", "accessToken")
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::NotFound { user } if user == "userName"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_branches() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/userName/repositoryName/branches")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "userName")
            .match_header("authorization", "Bearer accessToken")
            .with_status(200)
            .with_body(
                r#"[
                    { "name": "main", "commit": { "sha": "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc", "url": "x" }, "protected": false },
                    { "name": "dev", "commit": { "sha": "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d" } }
                ]"#,
            )
            .create_async()
            .await;

        let branches = arrange_service(&server)
            .repository_branches_list("userName", "repositoryName", "accessToken")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            branches,
            vec![
                GhBranch::new("main", "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc"),
                GhBranch::new("dev", "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d"),
            ]
        );
    }

    #[tokio::test]
    async fn list_branches_null_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repos/userName/repositoryName/branches")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let branches = arrange_service(&server)
            .repository_branches_list("userName", "repositoryName", "accessToken")
            .await
            .unwrap();

        assert!(branches.is_empty());
    }

    #[tokio::test]
    async fn list_branches_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repos/userName/repositoryName/branches")
            .with_status(404)
            .create_async()
            .await;

        let error = arrange_service(&server)
            .repository_branches_list("userName", "repositoryName", "accessToken")
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::NotFound { .. }));
    }

    #[test]
    fn upstream_message_falls_back_to_reason() {
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, b""),
            "Bad Gateway"
        );
        assert_eq!(upstream_message(StatusCode::BAD_GATEWAY, b"oops"), "oops");
    }
}
