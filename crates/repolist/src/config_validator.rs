//! Validation utilities.

use std::{fmt::Write, str::FromStr};

use repolist_config::{ApiDriver, Config, REPO_PLACEHOLDER, USER_PLACEHOLDER};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

#[derive(Default)]
struct ErrorCollector {
    errors: String,
}

impl ErrorCollector {
    fn missing(&mut self, name: &str) {
        self.push(format_args!("Missing env. var.: {}", name));
    }

    fn missing_placeholder(&mut self, name: &str, placeholder: &str) {
        self.push(format_args!(
            "Missing placeholder {} in env. var.: {}",
            placeholder, name
        ));
    }

    fn invalid(&mut self, name: &str) {
        self.push(format_args!("Invalid env. var.: {}", name));
    }

    fn push(&mut self, message: std::fmt::Arguments) {
        // Writing to a String cannot fail.
        let _ = write!(self.errors, "\n  - {}", message);
    }
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    let mut collector = ErrorCollector::default();
    let github = &config.api.github;

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        collector.missing("REPOLIST_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        collector.missing("REPOLIST_SERVER_BIND_PORT");
    }

    // Check upstream API configuration
    if ApiDriver::from_str(&config.api.driver_name).is_err() {
        collector.invalid("REPOLIST_API_DRIVER");
    }
    if github.root_url.is_empty() {
        collector.missing("REPOLIST_API_GITHUB_ROOT_URL");
    }
    if !has_segment(&github.user_repos_path, USER_PLACEHOLDER) {
        collector.missing_placeholder("REPOLIST_API_GITHUB_USER_REPOS_PATH", USER_PLACEHOLDER);
    }
    for placeholder in [USER_PLACEHOLDER, REPO_PLACEHOLDER] {
        if !has_segment(&github.user_repo_branches_path, placeholder) {
            collector.missing_placeholder(
                "REPOLIST_API_GITHUB_USER_REPO_BRANCHES_PATH",
                placeholder,
            );
        }
    }
    if github.allowed_sorts.is_empty() {
        collector.missing("REPOLIST_API_GITHUB_ALLOWED_SORTS");
    }
    if github.allowed_directions.is_empty() {
        collector.missing("REPOLIST_API_GITHUB_ALLOWED_DIRECTIONS");
    }

    // Check Sentry configuration
    if !(0.0..=1.0).contains(&config.sentry.traces_sample_rate) {
        collector.invalid("REPOLIST_SENTRY_TRACES_SAMPLE_RATE");
    }

    if collector.errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError {
            errors: collector.errors,
        })
    }
}

/// Placeholders are only substituted when they fill a whole path segment.
fn has_segment(path: &str, placeholder: &str) -> bool {
    path.split('/').any(|segment| segment == placeholder)
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
