//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::{CommandFactory, Parser};
use classroom_config::Config;
use classroom_logging::configure_logging;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod commands;
#[cfg(test)]
mod testutils;
mod validation;

pub use validation::ValidationError;

shadow!(build);

/// Get version data.
pub fn get_version_data() -> String {
    format!(
        "{} {} (commit {} - {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::COMMIT_HASH,
        build::COMMIT_DATE_3339
    )
}

/// Render the help text of a subcommand, or of the whole binary.
pub fn subcommand_help(name: &str) -> String {
    let mut command = Args::command();
    command.build();

    match command.find_subcommand_mut(name) {
        Some(subcommand) => subcommand.render_help().to_string(),
        None => command.render_help().to_string(),
    }
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;

    info!("{}", get_version_data());

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
