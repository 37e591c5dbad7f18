//! Session tracking module
//!
//! A study session is one planned block of study time: a subject, a topic,
//! a duration in minutes and an optional free-text description. Sessions
//! start out pending and can be flipped to done (and back); the manager owns
//! the collection and persists it through a [`SessionStore`] after every
//! mutation.
//!
//! # Example
//!
//! ```ignore
//! use study_core::session::SessionManager;
//! use study_storage::JsonFileStore;
//!
//! let store = JsonFileStore::new("sessoes_estudo.json");
//! let mut manager = SessionManager::new(store)?;
//!
//! let session = manager.create("Math", "Algebra", 60, "")?;
//! manager.mark_done(session.id)?;
//! println!("{:.0}% done", manager.statistics().progress_percent);
//! ```

mod manager;
mod model;
mod persistence;

// Re-export public API
pub use manager::SessionManager;
pub use model::{SessionStatus, Statistics, StudySession};
pub use persistence::SessionStore;

// Re-export memory store for testing
#[cfg(test)]
pub use persistence::memory::MemoryStore;
