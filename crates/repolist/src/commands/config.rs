use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use repolist_config::Config;

use super::{Command, CommandContext};

/// Show the effective configuration
#[derive(Parser)]
pub(crate) struct ConfigCommand;

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let mut writer = ctx.writer.write().await;
        for (key, value) in config_entries(&ctx.config) {
            writeln!(writer, "{key}: {value}")?;
        }

        Ok(())
    }
}

fn config_entries(config: &Config) -> Vec<(&'static str, String)> {
    let github = &config.api.github;
    let messages = &config.messages;

    vec![
        ("version", config.version.clone()),
        ("api.driver", config.api.driver.to_string()),
        ("api.github.root_url", github.root_url.clone()),
        (
            "api.github.connect_timeout",
            github.connect_timeout.to_string(),
        ),
        ("api.github.user_repos_path", github.user_repos_path.clone()),
        (
            "api.github.user_repo_branches_path",
            github.user_repo_branches_path.clone(),
        ),
        ("api.github.accept_header", github.accept_header.clone()),
        ("api.github.api_version", github.api_version.clone()),
        ("api.github.allowed_sorts", github.allowed_sorts.join(", ")),
        (
            "api.github.allowed_directions",
            github.allowed_directions.join(", "),
        ),
        ("messages.wrong_sort_param", messages.wrong_sort_param.clone()),
        (
            "messages.wrong_direction_param",
            messages.wrong_direction_param.clone(),
        ),
        ("messages.user_not_found", messages.user_not_found.clone()),
        ("messages.not_acceptable", messages.not_acceptable.clone()),
        ("messages.missing_header", messages.missing_header.clone()),
        ("messages.invalid_query", messages.invalid_query.clone()),
        ("messages.unexpected_error", messages.unexpected_error.clone()),
        ("logging.use_bunyan", config.logging.use_bunyan.to_string()),
        (
            "sentry.enabled",
            (!config.sentry.url.is_empty()).to_string(),
        ),
        (
            "sentry.traces_sample_rate",
            config.sentry.traces_sample_rate.to_string(),
        ),
        ("server.bind_ip", config.server.bind_ip.clone()),
        ("server.bind_port", config.server.bind_port.to_string()),
        (
            "server.workers_count",
            config
                .server
                .workers_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "default".into()),
        ),
    ]
}
