//! List command
//!
//! List study sessions, optionally filtered by status.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use study_core::{SessionManager, StudySession};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only pending sessions
    #[arg(long, conflicts_with = "done")]
    pub pending: bool,

    /// Show only done sessions
    #[arg(long)]
    pub done: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub fn execute(manager: &SessionManager, args: ListArgs) -> Result<()> {
    let sessions = if args.pending {
        manager.list_pending()
    } else if args.done {
        manager.list_done()
    } else {
        manager.list_all()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    if sessions.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }

    println!("{}", "Study sessions:".bold().underline());
    println!();
    for session in &sessions {
        print_session(session);
    }
    println!();
    println!("{} of {} session(s) shown", sessions.len(), manager.count());

    Ok(())
}

/// Render one session as a single line
pub fn print_session(session: &StudySession) {
    let glyph = if session.is_done() {
        "✓".green()
    } else {
        "○".yellow()
    };

    let when = match &session.completed_at {
        Some(done_at) => format!("done {}", done_at),
        None => format!("created {}", session.created_at),
    };

    let mut line = format!(
        "  {} {} {} - {} ({} min, {})",
        glyph,
        format!("#{}", session.id).cyan(),
        session.subject.bold(),
        session.topic,
        session.duration_minutes,
        when.dimmed()
    );
    if !session.description.is_empty() {
        line.push_str(&format!("\n      {}", session.description.dimmed()));
    }
    println!("{}", line);
}
