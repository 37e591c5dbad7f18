//! JSON file storage for the session collection

use crate::codec::StoredSession;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use study_core::{Result, SessionStore, StudyLogError, StudySession};
use tracing::{debug, warn};

/// Default data file name, kept for compatibility with existing data files
pub const DEFAULT_FILE: &str = "sessoes_estudo.json";

/// Whole-collection session store backed by a single JSON file
///
/// The file is a pretty-printed JSON array, rewritten in full on every
/// save via a temp-file-then-rename so readers never see a partial write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    ///
    /// The file is not touched until the first save; a missing file loads
    /// as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temp path beside the target, for atomic writes
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE.to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Write the collection atomically (write to temp, then rename)
    fn atomic_write(&self, stored: &[StoredSession]) -> Result<()> {
        let temp_path = self.temp_path();

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            StudyLogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, stored)?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StudyLogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved {} session(s) to {:?}", stored.len(), self.path);
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<StudySession>> {
        if !self.path.exists() {
            debug!("Data file {:?} does not exist, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Vec<StoredSession>>(&content) {
            Ok(stored) => Ok(stored.into_iter().map(StoredSession::into_session).collect()),
            Err(e) => {
                // Unreadable content is treated as no data; the next save
                // overwrites the file.
                warn!("Data file {:?} is not valid, ignoring it: {}", self.path, e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, sessions: &[StudySession]) -> Result<()> {
        let stored: Vec<StoredSession> = sessions.iter().map(StoredSession::from).collect();
        self.atomic_write(&stored)
    }
}
