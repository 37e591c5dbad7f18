//! study-log - personal study session tracker
//!
//! Records planned study sessions in a flat JSON file and tracks which
//! ones were actually studied.
//!
//! ## Quick Start
//!
//! ```bash
//! # Plan a session
//! study-log add "Math" "Algebra" 60
//!
//! # See what is pending
//! study-log list --pending
//!
//! # Mark it studied
//! study-log done 1
//!
//! # Check progress
//! study-log stats
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
