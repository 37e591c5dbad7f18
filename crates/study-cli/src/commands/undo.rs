//! Undo command
//!
//! Mark a session as pending again.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use study_core::SessionManager;

/// Arguments for the undo command
#[derive(Debug, Args)]
pub struct UndoArgs {
    /// Session id
    pub id: u32,
}

/// Execute the undo command
pub fn execute(manager: &mut SessionManager, args: UndoArgs) -> Result<()> {
    if manager.mark_pending(args.id)? {
        println!("{} Session #{} is pending again", "✓".green(), args.id);
    } else {
        eprintln!(
            "{} Session #{} not found or already pending",
            "⚠".yellow(),
            args.id
        );
    }
    Ok(())
}
