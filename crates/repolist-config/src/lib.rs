//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

/// Placeholder replaced by the user name in path templates.
pub const USER_PLACEHOLDER: &str = "{user}";
/// Placeholder replaced by the repository name in path templates.
pub const REPO_PLACEHOLDER: &str = "{repo}";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// API driver name, as read from the environment.
    pub driver_name: String,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// Path template to list repositories of a user.
    pub user_repos_path: String,
    /// Path template to list branches of a repository.
    pub user_repo_branches_path: String,
    /// Accept header sent upstream.
    pub accept_header: String,
    /// API version header value.
    pub api_version: String,
    /// Allowed values for the `sort` parameter.
    pub allowed_sorts: Vec<String>,
    /// Allowed values for the `direction` parameter.
    pub allowed_directions: Vec<String>,
}

/// User-facing error messages.
#[derive(Debug, Clone)]
pub struct MessagesConfig {
    pub wrong_sort_param: String,
    pub wrong_direction_param: String,
    pub user_not_found: String,
    pub not_acceptable: String,
    pub missing_header: String,
    pub invalid_query: String,
    /// Prefix, the upstream message is appended to it.
    pub unexpected_error: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Error messages.
    pub messages: MessagesConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        let driver_name = env_to_str("REPOLIST_API_DRIVER", "github");

        Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&driver_name).unwrap_or(ApiDriver::GitHub),
                driver_name,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("REPOLIST_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("REPOLIST_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    user_repos_path: env_to_str(
                        "REPOLIST_API_GITHUB_USER_REPOS_PATH",
                        "/users/{user}/repos",
                    ),
                    user_repo_branches_path: env_to_str(
                        "REPOLIST_API_GITHUB_USER_REPO_BRANCHES_PATH",
                        "/repos/{user}/{repo}/branches",
                    ),
                    accept_header: env_to_str(
                        "REPOLIST_API_GITHUB_ACCEPT_HEADER",
                        "application/vnd.github+json",
                    ),
                    api_version: env_to_str("REPOLIST_API_GITHUB_API_VERSION", "2022-11-28"),
                    allowed_sorts: env_to_list(
                        "REPOLIST_API_GITHUB_ALLOWED_SORTS",
                        "created, updated, pushed, full_name",
                    ),
                    allowed_directions: env_to_list(
                        "REPOLIST_API_GITHUB_ALLOWED_DIRECTIONS",
                        "asc, desc",
                    ),
                },
            },
            messages: MessagesConfig {
                wrong_sort_param: env_to_str(
                    "REPOLIST_MESSAGE_WRONG_SORT_PARAM",
                    "Wrong param value for sort. Allowed values are {created, updated, pushed, full_name}",
                ),
                wrong_direction_param: env_to_str(
                    "REPOLIST_MESSAGE_WRONG_DIRECTION_PARAM",
                    "Wrong param value for direction. Allowed values are {asc, desc}",
                ),
                user_not_found: env_to_str("REPOLIST_MESSAGE_USER_NOT_FOUND", "User not found"),
                not_acceptable: env_to_str(
                    "REPOLIST_MESSAGE_NOT_ACCEPTABLE",
                    "Not acceptable representation",
                ),
                missing_header: env_to_str(
                    "REPOLIST_MESSAGE_MISSING_HEADER",
                    "Required request header is missing",
                ),
                invalid_query: env_to_str(
                    "REPOLIST_MESSAGE_INVALID_QUERY",
                    "Invalid query parameters",
                ),
                unexpected_error: env_to_str(
                    "REPOLIST_MESSAGE_UNEXPECTED_ERROR",
                    "Unexpected error occurred: ",
                ),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("REPOLIST_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("REPOLIST_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("REPOLIST_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("REPOLIST_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("REPOLIST_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("REPOLIST_SERVER_WORKERS_COUNT", None),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn env_to_list(name: &str, default: &str) -> Vec<String> {
    split_list(&env_to_str(name, default))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn split_list_values() {
        assert_eq!(
            split_list("created, updated,pushed ,  full_name"),
            vec!["created", "updated", "pushed", "full_name"]
        );
        assert_eq!(split_list("asc,,desc,"), vec!["asc", "desc"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn list_from_env() {
        env::set_var("REPOLIST_TEST_LIST_FROM_ENV", "a, b");
        assert_eq!(env_to_list("REPOLIST_TEST_LIST_FROM_ENV", "x"), vec!["a", "b"]);
        assert_eq!(env_to_list("REPOLIST_TEST_LIST_UNSET", "x, y"), vec!["x", "y"]);
    }

    #[test]
    fn invalid_numbers_fall_back_to_default() {
        env::set_var("REPOLIST_TEST_INVALID_PORT", "port");
        assert_eq!(env_to_u16("REPOLIST_TEST_INVALID_PORT", 8008), 8008);
        assert_eq!(
            env_to_optional_u16("REPOLIST_TEST_INVALID_PORT", Some(2)),
            Some(2)
        );
    }
}
