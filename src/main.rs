//! vidctl binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use vidctl::cli::{Cli, Commands, ConfigAction};
use vidctl::logging::{self, LogTarget};

/// Where logs go for `command`; `None` disables logging.
fn log_target(command: &Commands) -> Option<LogTarget> {
    match command {
        // The terminal UI owns the screen
        Commands::Play(args) => args
            .log_file
            .clone()
            .or_else(logging::default_log_file)
            .map(LogTarget::File),
        Commands::Completions { .. } => None,
        _ => Some(LogTarget::Stderr),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = log_target(&cli.command) {
        logging::init(&target)?;
    }

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Inspect(args) => commands::inspect::handle(args),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
