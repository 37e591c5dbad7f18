//! Done command
//!
//! Mark a session as studied.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use study_core::SessionManager;

/// Arguments for the done command
#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Session id
    pub id: u32,
}

/// Execute the done command
pub fn execute(manager: &mut SessionManager, args: DoneArgs) -> Result<()> {
    if manager.mark_done(args.id)? {
        println!("{} Session #{} marked as done", "✓".green(), args.id);
    } else {
        eprintln!(
            "{} Session #{} not found or already done",
            "⚠".yellow(),
            args.id
        );
    }
    Ok(())
}
