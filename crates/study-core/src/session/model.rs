//! Session data models

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Completion state of a study session
///
/// A closed enum rather than a boolean so future states (skipped,
/// rescheduled, ...) can be added without reinterpreting existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Planned but not yet studied
    Pending,
    /// Studied
    Done,
}

impl SessionStatus {
    /// Whether this status counts as completed
    pub fn is_done(&self) -> bool {
        matches!(self, SessionStatus::Done)
    }
}

/// One planned study session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    /// Unique identifier, assigned by the manager
    pub id: u32,
    /// Subject being studied (e.g. "Math")
    pub subject: String,
    /// Topic within the subject (e.g. "Algebra")
    pub topic: String,
    /// Planned duration in minutes
    pub duration_minutes: u32,
    /// Optional free-text notes
    #[serde(default)]
    pub description: String,
    /// Completion state
    pub status: SessionStatus,
    /// When the session was recorded, `YYYY-MM-DD HH:MM:SS` local time.
    /// Set once at creation and never changed.
    pub created_at: String,
    /// When the session was last marked done; `None` while pending
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl StudySession {
    /// Create a new pending session with the given id
    pub fn new(
        id: u32,
        subject: impl Into<String>,
        topic: impl Into<String>,
        duration_minutes: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            subject: subject.into(),
            topic: topic.into(),
            duration_minutes,
            description: description.into(),
            status: SessionStatus::Pending,
            created_at: now_timestamp(),
            completed_at: None,
        }
    }

    /// Mark the session as done, stamping the completion time
    ///
    /// Calling this on an already-done session re-stamps the timestamp;
    /// the manager guards against that at its layer.
    pub fn mark_done(&mut self) {
        self.status = SessionStatus::Done;
        self.completed_at = Some(now_timestamp());
    }

    /// Mark the session as pending again, clearing the completion time
    pub fn mark_pending(&mut self) {
        self.status = SessionStatus::Pending;
        self.completed_at = None;
    }

    /// Whether the session has been studied
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}

/// Aggregate progress over a collection of sessions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of sessions recorded
    pub total: usize,
    /// Number of sessions marked done
    pub done_count: usize,
    /// Number of sessions still pending
    pub pending_count: usize,
    /// done_count / total as a percentage; 0.0 when there are no sessions
    pub progress_percent: f64,
    /// Minutes planned across all sessions
    pub total_minutes: u64,
    /// Minutes planned across done sessions only
    pub studied_minutes: u64,
}

impl Statistics {
    /// Compute statistics over a collection of sessions
    pub fn from_sessions(sessions: &[StudySession]) -> Self {
        let total = sessions.len();
        let done_count = sessions.iter().filter(|s| s.is_done()).count();
        let progress_percent = if total > 0 {
            done_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            done_count,
            pending_count: total - done_count,
            progress_percent,
            total_minutes: sessions.iter().map(|s| s.duration_minutes as u64).sum(),
            studied_minutes: sessions
                .iter()
                .filter(|s| s.is_done())
                .map(|s| s.duration_minutes as u64)
                .sum(),
        }
    }
}

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`
fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
