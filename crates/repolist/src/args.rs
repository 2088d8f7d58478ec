use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use repolist_config::{ApiDriver, Config};
use repolist_core::CoreModule;
use repolist_ghapi_interface::ApiService;
use repolist_ghapi_null::NullApiService;
use repolist_sentry::with_sentry_configuration;
use repolist_server::ghapi::MetricsApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::commands::{Command, CommandContext, SubCommand};

#[derive(Parser)]
#[command(version, about = "List the non-forked GitHub repositories of a user, with their branches", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();
            let api_service = build_api_service(&config)?;

            let ctx = CommandContext {
                config: config.clone(),
                api_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config, || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(|| runtime).block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}

fn build_api_service(config: &Config) -> Result<Box<dyn ApiService>> {
    if config.api.driver == ApiDriver::GitHub {
        info!("Using MetricsApiService API driver");
        Ok(Box::new(MetricsApiService::new(config.clone())?))
    } else {
        info!("Using NullApiService API driver");
        Ok(Box::new(NullApiService::new(config.clone())))
    }
}
