//! Configuration inspection CLI commands.

use std::path::Path;

use clap::Subcommand;
use semantic_logger::config::config_file_path;

use crate::error::CliError;
use crate::runner::load_config;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(config_file_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            print!("{}", config.to_config_string());
            Ok(())
        }
    }
}
