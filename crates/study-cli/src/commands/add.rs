//! Add command
//!
//! Plan a new study session.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use study_core::SessionManager;

/// Arguments for the add command
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Subject being studied (e.g. "Math")
    pub subject: String,

    /// Topic within the subject (e.g. "Algebra")
    pub topic: String,

    /// Planned duration in minutes
    pub duration: u32,

    /// Free-text notes
    #[arg(long, short, default_value = "")]
    pub description: String,
}

/// Execute the add command
pub fn execute(manager: &mut SessionManager, args: AddArgs) -> Result<()> {
    let session = manager.create(args.subject, args.topic, args.duration, args.description)?;

    println!(
        "{} Planned session {}: {} - {} ({} min)",
        "✓".green(),
        format!("#{}", session.id).cyan(),
        session.subject.bold(),
        session.topic,
        session.duration_minutes
    );

    Ok(())
}
