//! study-core - Core library for study-log
//!
//! This crate provides the business logic for the study session tracker:
//! the session model, the session manager and its statistics, and the
//! storage contract implemented by persistence backends.

pub mod error;
pub mod session;

pub use error::{Result, StudyLogError};
pub use session::{SessionManager, SessionStatus, SessionStore, Statistics, StudySession};
