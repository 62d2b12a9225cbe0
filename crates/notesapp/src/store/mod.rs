//! # Storage Layer
//!
//! This module defines the storage abstraction for notes. The [`DataStore`]
//! trait is what request handlers talk to; [`note_store::NoteStore`] is the
//! one implementation, parameterised over a [`backend::StorageBackend`].
//!
//! ## Split of Responsibilities
//!
//! - **NoteStore** owns the authoritative collection: a map from id to note
//!   plus the id counter. It validates input, assigns ids and timestamps,
//!   orders results and decides what to persist.
//! - **StorageBackend** only moves snapshots in and out: load the whole
//!   collection at startup, save the whole collection after each mutation.
//!
//! ## Locking
//!
//! All state sits behind a single `Mutex`. Every operation, including the
//! backend write that follows a mutation, runs while holding it. Two
//! concurrent creates can never observe the same counter value, and the file
//! on disk is always written by one caller at a time.
//!
//! ## Failure Model
//!
//! Each mutation applies the change in memory, then saves. If the save fails
//! the change is undone before the lock is released, so the in-memory
//! collection never runs ahead of the persisted one.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file mirror, used when `data_file` is configured.
//! - [`memory::InMemoryStore`]: pure in-memory mode and tests.
//!
//! ## File Layout
//!
//! ```text
//! notes.json        # [ {id, title, content, created_at, updated_at}, ... ]
//! ```

use crate::error::Result;
use crate::model::{NewNote, Note, NotePatch};
use crate::pagination::{Page, PageRequest};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;

/// Abstract interface for note storage.
///
/// Implementations are shared across request handlers, so every method
/// takes `&self` and the trait requires `Send + Sync`.
pub trait DataStore: Send + Sync {
    /// Validate and insert a new note, assigning its id and timestamps.
    fn create(&self, new_note: NewNote) -> Result<Note>;

    /// Get a note by id
    fn get(&self, id: u64) -> Result<Note>;

    /// Apply a partial update
    fn update(&self, id: u64, patch: NotePatch) -> Result<Note>;

    /// Delete a note permanently
    fn delete(&self, id: u64) -> Result<()>;

    /// One page of notes in ascending id order
    fn list(&self, request: PageRequest) -> Result<Page<Note>>;

    /// Case-insensitive substring search over title and content, ascending id.
    /// An empty query matches every note.
    fn search(&self, query: &str) -> Result<Vec<Note>>;

    /// Number of stored notes
    fn count(&self) -> Result<usize>;
}
