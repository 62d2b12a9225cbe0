use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory storage backend.
///
/// Used for the pure in-memory mode (no `data_file` configured) and for tests.
/// The snapshot it keeps is what a file backend would have written, so tests
/// can assert on "persisted" state without touching the filesystem.
#[derive(Default)]
pub struct MemBackend {
    snapshot: Mutex<Vec<Note>>,
    saves: AtomicUsize,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing snapshot, as if loaded from disk.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            snapshot: Mutex::new(notes),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the last saved snapshot.
    pub fn snapshot(&self) -> Vec<Note> {
        match self.snapshot.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Note>> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| NotesError::Store("memory backend lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| NotesError::Store("memory backend lock poisoned".to_string()))?;
        *guard = notes.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://notes".to_string()
    }
}
