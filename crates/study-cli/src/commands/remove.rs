//! Remove command
//!
//! Remove a session from the collection.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;
use study_core::SessionManager;

/// Arguments for the remove command
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Session id
    pub id: u32,

    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
}

/// Execute the remove command
pub fn execute(manager: &mut SessionManager, args: RemoveArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove session #{}?", args.id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if manager.remove(args.id)? {
        println!("{} Session #{} removed", "✓".green(), args.id);
    } else {
        eprintln!("{} Session #{} not found", "⚠".yellow(), args.id);
    }
    Ok(())
}
