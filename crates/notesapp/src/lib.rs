//! # notesapp
//!
//! The core of the notes service: a note model with field validation, and a
//! store that owns the collection, assigns ids and timestamps, and mirrors its
//! state to memory or a JSON file.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP server (crates/notes)                  │
//! │  - routing, status codes, response shapes    │
//! └──────────────────────────────────────────────┘
//!                       │  DataStore
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  NoteStore (store/note_store.rs)             │
//! │  - validation, ids, timestamps, ordering     │
//! │  - one lock around every operation           │
//! └──────────────────────────────────────────────┘
//!                       │  StorageBackend
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  MemBackend | FsBackend                      │
//! │  - whole-collection load / save              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate knows about HTTP. Errors are [`error::NotesError`]
//! values; the server decides which status code each one becomes.
//!
//! ## Example
//!
//! ```
//! use notesapp::model::{NewNote, NotePatch};
//! use notesapp::store::memory::InMemoryStore;
//! use notesapp::store::DataStore;
//!
//! let store = InMemoryStore::new();
//! let note = store.create(NewNote::new("Groceries", "milk")).unwrap();
//! let note = store.update(note.id, NotePatch::content("milk, eggs")).unwrap();
//! assert_eq!(store.search("EGGS").unwrap(), vec![note]);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod store;

pub use error::{NotesError, Result};
