use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use repolist_core::use_cases::repositories::GetUserRepositoriesInterface;
use repolist_ghapi_interface::RepositoryListParams;
use repolist_models::UserRepositoriesResponse;
use shaku::HasComponent;

use super::{Command, CommandContext};

/// List the non-forked repositories of a user, with their branches
#[derive(Parser)]
pub(crate) struct FetchCommand {
    /// GitHub user name
    user_name: String,
    /// GitHub access token
    #[arg(long, default_value = "")]
    token: String,
    /// Sort key
    #[arg(long)]
    sort: Option<String>,
    /// Sort direction
    #[arg(long)]
    direction: Option<String>,
}

#[async_trait]
impl Command for FetchCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_user_repositories: &dyn GetUserRepositoriesInterface =
            ctx.core_module.resolve_ref();
        let repositories = get_user_repositories
            .run(
                &ctx.as_core_context(),
                &self.user_name,
                &self.token,
                &RepositoryListParams::new(self.sort, self.direction),
            )
            .await?;

        let output = serde_json::to_string_pretty(&UserRepositoriesResponse::new(repositories))?;
        writeln!(ctx.writer.write().await, "{}", output)?;

        Ok(())
    }
}
