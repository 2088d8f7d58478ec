use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use repolist_server::server::{run_server, AppContext};

use super::{Command, CommandContext};

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        // The actix server is bound to the local task set.
        tokio::task::spawn_local(async move {
            let context =
                AppContext::new_with_adapters(ctx.config, ctx.core_module, ctx.api_service);

            run_server(context).await
        })
        .await??;

        Ok(())
    }
}
