use std::sync::Arc;

use clap::Parser;
use classroom_canvas_api::CanvasApiService;
use classroom_config::Config;
use classroom_core::CoreModule;
use classroom_ghapi_github::GithubApiService;
use tokio::sync::RwLock;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(name = "classroom", version, about = "GitHub Classroom utilities", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(mut config: Config, args: Args) -> Result<()> {
        args.cmd.configure(&mut config);

        let sync = |config: Config, args: Args| async move {
            let ctx = CommandContext {
                core_module: CoreModule::builder().build(),
                api_service: Box::new(GithubApiService::new(config.clone())),
                canvas_service: Box::new(CanvasApiService::new(config)),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
