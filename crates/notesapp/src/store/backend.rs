use crate::error::Result;
use crate::model::Note;

/// Abstract interface for raw snapshot I/O.
/// This trait handles the "how" of storage (file vs memory),
/// while NoteStore handles the "what" (ids, validation, ordering, rollback).
pub trait StorageBackend: Send + Sync {
    /// Load the full collection. An absent store loads as empty.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored collection with `notes`.
    /// Implementations that write to disk MUST do so atomically.
    fn save(&self, notes: &[Note]) -> Result<()>;

    /// Human-readable location, used in logs.
    fn location(&self) -> String;
}
