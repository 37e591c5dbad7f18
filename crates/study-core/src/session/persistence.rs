//! Session storage trait and abstractions

use super::model::StudySession;
use crate::error::Result;

/// Trait for whole-collection session persistence
///
/// The collection is always written as a whole; there is no incremental
/// append. Implementations must treat a missing backing location as an
/// empty collection rather than an error.
pub trait SessionStore: Send + Sync {
    /// Load the full collection
    fn load(&self) -> Result<Vec<StudySession>>;

    /// Replace the persisted collection with `sessions`
    fn save(&self, sessions: &[StudySession]) -> Result<()>;
}

/// In-memory storage for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    /// In-memory session store for testing
    ///
    /// Counts `save` calls so tests can assert that no-op manager
    /// operations do not persist.
    pub struct MemoryStore {
        sessions: RwLock<Vec<StudySession>>,
        save_count: AtomicUsize,
    }

    impl MemoryStore {
        /// Create an empty in-memory store
        pub fn new() -> Self {
            Self {
                sessions: RwLock::new(Vec::new()),
                save_count: AtomicUsize::new(0),
            }
        }

        /// Create a store pre-seeded with sessions
        pub fn with_sessions(sessions: Vec<StudySession>) -> Self {
            Self {
                sessions: RwLock::new(sessions),
                save_count: AtomicUsize::new(0),
            }
        }

        /// Number of times `save` has been called
        pub fn save_count(&self) -> usize {
            self.save_count.load(Ordering::SeqCst)
        }
    }

    impl Default for MemoryStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SessionStore for MemoryStore {
        fn load(&self) -> Result<Vec<StudySession>> {
            Ok(self.sessions.read().unwrap().clone())
        }

        fn save(&self, sessions: &[StudySession]) -> Result<()> {
            *self.sessions.write().unwrap() = sessions.to_vec();
            self.save_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_memory_store_round_trip() {
            let store = MemoryStore::new();
            let sessions = vec![StudySession::new(1, "Math", "Algebra", 60, "")];

            store.save(&sessions).unwrap();
            let loaded = store.load().unwrap();

            assert_eq!(loaded, sessions);
            assert_eq!(store.save_count(), 1);
        }

        #[test]
        fn test_memory_store_empty() {
            let store = MemoryStore::new();
            assert!(store.load().unwrap().is_empty());
            assert_eq!(store.save_count(), 0);
        }

        #[test]
        fn test_memory_store_seeded() {
            let store =
                MemoryStore::with_sessions(vec![StudySession::new(7, "History", "WWII", 45, "")]);
            let loaded = store.load().unwrap();
            assert_eq!(loaded.len(), 1);
            assert_eq!(loaded[0].id, 7);
        }
    }
}
