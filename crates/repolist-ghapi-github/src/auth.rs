//! Auth.

use std::time::Duration;

use http::{
    header::{self, HeaderName, HeaderValue},
    HeaderMap,
};
use repolist_config::{Config, REPO_PLACEHOLDER, USER_PLACEHOLDER};
use reqwest::ClientBuilder;
use url::Url;

use crate::errors::GitHubError;

/// API version header name.
pub(crate) const API_VERSION_HEADER: &str = "x-github-api-version";

/// Get GitHub client builder.
pub(crate) fn get_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new().connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
}

/// Build the headers sent along each request.
///
/// The bearer token is only set when one is given.
pub(crate) fn build_request_headers(
    config: &Config,
    user_name: &str,
    access_token: &str,
) -> Result<HeaderMap, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header_value("accept", &config.api.github.accept_header)?,
    );
    headers.insert(
        HeaderName::from_static(API_VERSION_HEADER),
        header_value(API_VERSION_HEADER, &config.api.github.api_version)?,
    );
    headers.insert(header::USER_AGENT, header_value("user-agent", user_name)?);

    if !access_token.is_empty() {
        let mut value = header_value("authorization", &format!("Bearer {access_token}"))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(headers)
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, GitHubError> {
    HeaderValue::from_str(value).map_err(|e| GitHubError::InvalidHeaderValue { name, source: e })
}

/// Build a GitHub URL from a path template.
///
/// Placeholders fill whole path segments and their values are percent-encoded,
/// so a value can never add or remove a segment.
pub(crate) fn build_github_url(
    config: &Config,
    path_template: &str,
    values: &[(&str, &str)],
) -> Result<Url, GitHubError> {
    let mut url = Url::parse(&config.api.github.root_url)
        .map_err(|e| GitHubError::InvalidRootUrl { source: e })?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| GitHubError::CannotBeABase {
                url: config.api.github.root_url.clone(),
            })?;
        segments.pop_if_empty();

        for segment in path_template.split('/').filter(|s| !s.is_empty()) {
            let value = values
                .iter()
                .find(|(placeholder, _)| *placeholder == segment)
                .map_or(segment, |(_, value)| *value);

            // Dot segments are dropped by the URL serializer.
            if value.is_empty() || value == "." || value == ".." {
                return Err(GitHubError::InvalidPathSegment {
                    value: value.to_string(),
                });
            }

            segments.push(value);
        }
    }

    Ok(url)
}

/// Build the repository listing URL of a user.
pub(crate) fn build_user_repos_url(config: &Config, user_name: &str) -> Result<Url, GitHubError> {
    build_github_url(
        config,
        &config.api.github.user_repos_path,
        &[(USER_PLACEHOLDER, user_name)],
    )
}

/// Build the branch listing URL of a user repository.
pub(crate) fn build_user_repo_branches_url(
    config: &Config,
    user_name: &str,
    repository_name: &str,
) -> Result<Url, GitHubError> {
    build_github_url(
        config,
        &config.api.github.user_repo_branches_path,
        &[
            (USER_PLACEHOLDER, user_name),
            (REPO_PLACEHOLDER, repository_name),
        ],
    )
}
