//! Stats command
//!
//! Show aggregate progress statistics.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use study_core::SessionManager;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the stats command
pub fn execute(manager: &SessionManager, args: StatsArgs) -> Result<()> {
    let stats = manager.statistics();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Progress:".bold().underline());
    println!();
    println!("  Sessions: {} total", stats.total.to_string().cyan());
    println!(
        "  Done:     {}  Pending: {}",
        stats.done_count.to_string().green(),
        stats.pending_count.to_string().yellow()
    );
    println!("  Progress: {:.1}%", stats.progress_percent);
    println!(
        "  Minutes:  {} studied of {} planned",
        stats.studied_minutes.to_string().green(),
        stats.total_minutes
    );

    Ok(())
}
