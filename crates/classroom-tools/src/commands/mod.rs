//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use classroom_canvas_interface::CanvasService;
use classroom_config::Config;
use classroom_core::{CoreContext, CoreModule};
use classroom_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{create_roster::CreateRosterCommand, fix_collaborators::FixCollaboratorsCommand};
use crate::Result;

mod create_roster;
mod fix_collaborators;

pub(crate) struct CommandContext {
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub canvas_service: Box<dyn CanvasService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            canvas_service: self.canvas_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    FixCollaborators(FixCollaboratorsCommand),
    CreateRoster(CreateRosterCommand),
}

impl SubCommand {
    /// Copy the credentials given on the command line into `config`.
    pub fn configure(&self, config: &mut Config) {
        match self {
            Self::FixCollaborators(sub) => sub.configure(config),
            Self::CreateRoster(sub) => sub.configure(config),
        }
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::FixCollaborators(sub) => sub.execute(ctx).await,
            Self::CreateRoster(sub) => sub.execute(ctx).await,
        }
    }
}
