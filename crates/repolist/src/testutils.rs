use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use repolist_config::Config;
use repolist_core::CoreModule;
use repolist_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version(),
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<Vec<u8>>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let command_args = {
        let mut tmp_args = vec!["repolist"];
        tmp_args.extend(command_args);
        tmp_args
    };

    let args = Args::try_parse_from(command_args)?;
    CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?;

    let vec = buf.read().await.to_vec();
    Ok(String::from_utf8(vec)?)
}
