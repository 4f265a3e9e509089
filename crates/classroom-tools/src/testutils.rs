use std::{io::Write, sync::Arc};

use clap::Parser;
use classroom_canvas_interface::MockCanvasService;
use classroom_core::CoreModule;
use classroom_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub canvas_service: MockCanvasService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            canvas_service: MockCanvasService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            canvas_service: Box::new(self.canvas_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["classroom"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
