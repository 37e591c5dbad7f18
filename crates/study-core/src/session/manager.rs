//! Session manager for CRUD and statistics operations

use super::model::{SessionStatus, Statistics, StudySession};
use super::persistence::SessionStore;
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Manager for the session collection
///
/// Owns the in-memory collection, loaded once from the store at
/// construction. Every successful mutation persists the whole collection
/// back through the store before returning.
///
/// "Not found" and "already in that state" are reported as `Ok(false)`
/// rather than errors; `Err` is reserved for store I/O failures.
pub struct SessionManager {
    /// Storage backend
    store: Arc<dyn SessionStore>,
    /// Working collection, in insertion order
    sessions: Vec<StudySession>,
}

impl SessionManager {
    /// Create a manager backed by the given store, loading the collection
    pub fn new(store: impl SessionStore + 'static) -> Result<Self> {
        Self::with_store(Arc::new(store))
    }

    /// Create a manager with shared storage
    pub fn with_store(store: Arc<dyn SessionStore>) -> Result<Self> {
        let sessions = store.load()?;
        debug!("Loaded {} session(s) from store", sessions.len());
        Ok(Self { store, sessions })
    }

    /// Record a new pending session and persist the collection
    pub fn create(
        &mut self,
        subject: impl Into<String>,
        topic: impl Into<String>,
        duration_minutes: u32,
        description: impl Into<String>,
    ) -> Result<StudySession> {
        let id = self.next_id();
        let session = StudySession::new(id, subject, topic, duration_minutes, description);
        self.sessions.push(session.clone());
        self.persist()?;
        Ok(session)
    }

    /// Mark a session as done
    ///
    /// Returns `Ok(false)` without persisting when no session has that id
    /// or the session is already done.
    pub fn mark_done(&mut self, id: u32) -> Result<bool> {
        match self.find_mut(id) {
            Some(session) if !session.is_done() => {
                session.mark_done();
                self.persist()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Mark a session as pending again
    ///
    /// Returns `Ok(false)` without persisting when no session has that id
    /// or the session is already pending.
    pub fn mark_pending(&mut self, id: u32) -> Result<bool> {
        match self.find_mut(id) {
            Some(session) if session.is_done() => {
                session.mark_pending();
                self.persist()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Remove a session entirely
    ///
    /// Returns `Ok(false)` without persisting when no session has that id.
    pub fn remove(&mut self, id: u32) -> Result<bool> {
        match self.sessions.iter().position(|s| s.id == id) {
            Some(index) => {
                self.sessions.remove(index);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All pending sessions, in collection order
    pub fn list_pending(&self) -> Vec<StudySession> {
        self.filtered(SessionStatus::Pending)
    }

    /// All done sessions, in collection order
    pub fn list_done(&self) -> Vec<StudySession> {
        self.filtered(SessionStatus::Done)
    }

    /// A copy of the full collection, in collection order
    pub fn list_all(&self) -> Vec<StudySession> {
        self.sessions.clone()
    }

    /// Aggregate progress over the collection
    pub fn statistics(&self) -> Statistics {
        Statistics::from_sessions(&self.sessions)
    }

    /// Number of sessions recorded
    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    fn next_id(&self) -> u32 {
        self.sessions.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut StudySession> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    fn filtered(&self, status: SessionStatus) -> Vec<StudySession> {
        self.sessions
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::persistence::memory::MemoryStore;
    use pretty_assertions::assert_eq;

    fn create_manager() -> (SessionManager, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let manager = SessionManager::with_store(store.clone()).unwrap();
        (manager, store)
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let (mut manager, _store) = create_manager();

        let a = manager.create("Math", "Algebra", 60, "").unwrap();
        let b = manager.create("Math", "Geometry", 30, "").unwrap();
        let c = manager.create("History", "WWII", 45, "").unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn test_next_id_is_max_plus_one_after_removal() {
        let (mut manager, _store) = create_manager();

        manager.create("Math", "Algebra", 60, "").unwrap();
        manager.create("Math", "Geometry", 30, "").unwrap();
        manager.remove(1).unwrap();

        // max existing id is 2, so the next is 3
        let next = manager.create("History", "WWII", 45, "").unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_create_persists() {
        let (mut manager, store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_mark_done_twice() {
        let (mut manager, store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();

        assert!(manager.mark_done(1).unwrap());
        assert_eq!(store.save_count(), 2);

        // Already done: no-op, no persist
        assert!(!manager.mark_done(1).unwrap());
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_mark_pending_restores_eligibility() {
        let (mut manager, _store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();

        assert!(manager.mark_done(1).unwrap());
        assert!(manager.mark_pending(1).unwrap());
        assert!(manager.mark_done(1).unwrap());
    }

    #[test]
    fn test_mark_pending_clears_completed_at() {
        let (mut manager, _store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();
        manager.mark_done(1).unwrap();

        assert!(manager.list_all()[0].completed_at.is_some());

        manager.mark_pending(1).unwrap();
        let session = &manager.list_all()[0];
        assert_eq!(session.status, SessionStatus::Pending);
        assert!(session.completed_at.is_none());
    }

    #[test]
    fn test_mark_done_unknown_id() {
        let (mut manager, store) = create_manager();
        assert!(!manager.mark_done(42).unwrap());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_mark_pending_on_pending_is_noop() {
        let (mut manager, store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();

        assert!(!manager.mark_pending(1).unwrap());
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_remove() {
        let (mut manager, store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();

        assert!(manager.remove(1).unwrap());
        assert_eq!(manager.count(), 0);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_does_not_write() {
        let (mut manager, store) = create_manager();

        assert!(!manager.remove(999).unwrap());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_list_filters() {
        let (mut manager, _store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();
        manager.create("Math", "Geometry", 30, "").unwrap();
        manager.mark_done(1).unwrap();

        let pending = manager.list_pending();
        let done = manager.list_done();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 2);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, 1);
    }

    #[test]
    fn test_list_all_returns_copy() {
        let (mut manager, _store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();

        let mut copy = manager.list_all();
        copy[0].subject = "Tampered".to_string();
        copy.clear();

        assert_eq!(manager.list_all()[0].subject, "Math");
    }

    #[test]
    fn test_statistics_scenario() {
        let (mut manager, _store) = create_manager();
        manager.create("Math", "Algebra", 60, "").unwrap();
        manager.create("Math", "Geometry", 30, "").unwrap();

        assert_eq!(manager.list_pending().len(), 2);
        assert!(manager.mark_done(1).unwrap());

        let stats = manager.statistics();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.done_count, 1);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.progress_percent, 50.0);
        assert_eq!(stats.total_minutes, 90);
        assert_eq!(stats.studied_minutes, 60);
    }

    #[test]
    fn test_statistics_consistency() {
        let (mut manager, _store) = create_manager();
        for i in 0..5 {
            manager.create("Subject", "Topic", 10 + i, "").unwrap();
        }
        manager.mark_done(2).unwrap();
        manager.mark_done(4).unwrap();

        let stats = manager.statistics();
        assert_eq!(stats.total, manager.list_all().len());
        assert_eq!(stats.done_count + stats.pending_count, stats.total);
    }

    #[test]
    fn test_empty_store_statistics() {
        let (manager, _store) = create_manager();
        let stats = manager.statistics();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress_percent, 0.0);
    }

    #[test]
    fn test_loads_existing_collection() {
        let store = Arc::new(MemoryStore::with_sessions(vec![
            StudySession::new(3, "Physics", "Optics", 90, ""),
            StudySession::new(5, "Physics", "Waves", 30, ""),
        ]));
        let mut manager = SessionManager::with_store(store).unwrap();

        assert_eq!(manager.count(), 2);
        // Next id continues from the loaded maximum
        let created = manager.create("Physics", "Sound", 20, "").unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn test_create_with_description() {
        let (mut manager, _store) = create_manager();
        let session = manager
            .create("Math", "Algebra", 60, "chapters 1-3")
            .unwrap();
        assert_eq!(session.description, "chapters 1-3");
    }
}
