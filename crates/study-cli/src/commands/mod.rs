//! CLI commands module
//!
//! The command layer is a thin dispatcher: it parses arguments, builds the
//! session manager once, calls manager operations and renders the results.
//! All user-facing text lives here, none of it in the core crates.

pub mod add;
pub mod done;
pub mod list;
pub mod remove;
pub mod stats;
pub mod undo;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use study_core::SessionManager;
use study_storage::JsonFileStore;

/// study-log - personal study session tracker
#[derive(Debug, Parser)]
#[command(name = "study-log")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Data file path
    #[arg(
        long,
        global = true,
        env = "STUDY_LOG_FILE",
        default_value = study_storage::DEFAULT_FILE
    )]
    pub file: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan a new study session
    Add(add::AddArgs),

    /// List study sessions
    List(list::ListArgs),

    /// Mark a session as studied
    Done(done::DoneArgs),

    /// Mark a session as pending again
    Undo(undo::UndoArgs),

    /// Remove a session
    Remove(remove::RemoveArgs),

    /// Show progress statistics
    Stats(stats::StatsArgs),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Single manager instance for the whole invocation
    tracing::debug!("Using data file {:?}", cli.file);
    let store = JsonFileStore::new(&cli.file);
    let mut manager = SessionManager::new(store)?;

    // Dispatch to command handler
    match cli.command {
        Commands::Add(args) => add::execute(&mut manager, args),
        Commands::List(args) => list::execute(&manager, args),
        Commands::Done(args) => done::execute(&mut manager, args),
        Commands::Undo(args) => undo::execute(&mut manager, args),
        Commands::Remove(args) => remove::execute(&mut manager, args),
        Commands::Stats(args) => stats::execute(&manager, args),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }
}
