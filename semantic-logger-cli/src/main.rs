//! semlog - command line front end for semantic-logger
//!
//! Emits messages with a semantic intent and evaluates deadline reminders,
//! using the logging setup from the config file.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use semantic_logger::VERSION;

use commands::config::ConfigCommands;
use commands::emit::EmitArgs;
use commands::remind::RemindArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "semlog")]
#[command(version = VERSION)]
#[command(about = "Log messages by what they mean", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.semantic-logger/config.ini
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logger name attached to every message
    #[arg(long, global = true, default_value = "semlog")]
    name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one message with a semantic intent
    Emit(EmitArgs),

    /// Log a message at error level once a deadline has passed
    Remind(RemindArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config { command } => commands::config::run(command, config_path),
        Commands::Emit(args) => {
            let runner = CliRunner::new(config_path)?;
            commands::emit::run(&runner.logger(&cli.name), args)
        }
        Commands::Remind(args) => {
            // Validated first so a bad date never touches the log file.
            let reminder = args.validate()?;
            let runner = CliRunner::new(config_path)?;
            commands::remind::run(runner.logger(&cli.name), reminder)
        }
    }
}
