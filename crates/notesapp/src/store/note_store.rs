use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{NotesError, Result};
use crate::model::{NewNote, Note, NotePatch};
use crate::pagination::{Page, PageRequest, DEFAULT_MAX_PER_PAGE};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

#[derive(Debug)]
struct Collection {
    notes: BTreeMap<u64, Note>,
    next_id: u64,
}

impl Collection {
    fn from_snapshot(snapshot: Vec<Note>) -> Result<Self> {
        let mut notes = BTreeMap::new();
        for note in snapshot {
            if note.id == 0 {
                return Err(NotesError::Store(
                    "stored note has id 0; ids start at 1".to_string(),
                ));
            }
            let id = note.id;
            if notes.insert(id, note).is_some() {
                return Err(NotesError::Store(format!("duplicate note id {} in store", id)));
            }
        }
        let next_id = notes.keys().next_back().map_or(1, |max| max + 1);
        Ok(Self { notes, next_id })
    }

    fn snapshot(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }
}

pub struct NoteStore<B: StorageBackend> {
    backend: B,
    state: Mutex<Collection>,
    max_per_page: usize,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Start with an empty collection without reading the backend.
    /// The first mutation overwrites whatever the backend held.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(Collection {
                notes: BTreeMap::new(),
                next_id: 1,
            }),
            max_per_page: DEFAULT_MAX_PER_PAGE,
        }
    }

    /// Open a store, seeding the collection from the backend.
    pub fn open(backend: B) -> Result<Self> {
        let collection = Collection::from_snapshot(backend.load()?)?;
        info!(
            location = %backend.location(),
            notes = collection.notes.len(),
            next_id = collection.next_id,
            "note store opened"
        );
        Ok(Self {
            backend,
            state: Mutex::new(collection),
            max_per_page: DEFAULT_MAX_PER_PAGE,
        })
    }

    pub fn with_max_per_page(mut self, max_per_page: usize) -> Self {
        self.max_per_page = max_per_page.max(1);
        self
    }

    pub fn max_per_page(&self) -> usize {
        self.max_per_page
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collection>> {
        self.state
            .lock()
            .map_err(|_| NotesError::Store("note store lock poisoned".to_string()))
    }

    fn persist(&self, collection: &Collection) -> Result<()> {
        self.backend.save(&collection.snapshot())
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn create(&self, new_note: NewNote) -> Result<Note> {
        let (title, content) = new_note.validate()?;

        let mut state = self.lock()?;
        let id = state.next_id;
        let note = Note::new(id, title, content);
        state.notes.insert(id, note.clone());
        state.next_id += 1;

        if let Err(e) = self.persist(&state) {
            state.notes.remove(&id);
            state.next_id = id;
            warn!(id, error = %e, "create rolled back after persistence failure");
            return Err(e);
        }

        debug!(id, "note created");
        Ok(note)
    }

    fn get(&self, id: u64) -> Result<Note> {
        let state = self.lock()?;
        state.notes.get(&id).cloned().ok_or(NotesError::NotFound(id))
    }

    fn update(&self, id: u64, patch: NotePatch) -> Result<Note> {
        let mut state = self.lock()?;
        let previous = state
            .notes
            .get(&id)
            .cloned()
            .ok_or(NotesError::NotFound(id))?;

        let mut updated = previous.clone();
        if !patch.apply_to(&mut updated)? {
            return Ok(previous);
        }
        state.notes.insert(id, updated.clone());

        if let Err(e) = self.persist(&state) {
            state.notes.insert(id, previous);
            warn!(id, error = %e, "update rolled back after persistence failure");
            return Err(e);
        }

        debug!(id, "note updated");
        Ok(updated)
    }

    fn delete(&self, id: u64) -> Result<()> {
        let mut state = self.lock()?;
        let removed = state.notes.remove(&id).ok_or(NotesError::NotFound(id))?;

        if let Err(e) = self.persist(&state) {
            state.notes.insert(id, removed);
            warn!(id, error = %e, "delete rolled back after persistence failure");
            return Err(e);
        }

        debug!(id, "note deleted");
        Ok(())
    }

    fn list(&self, request: PageRequest) -> Result<Page<Note>> {
        let request = request.normalize(self.max_per_page)?;
        let state = self.lock()?;
        let items = request
            .slice(state.notes.values())
            .into_iter()
            .cloned()
            .collect();

        Ok(Page {
            items,
            total: state.notes.len(),
            page: request.page,
            per_page: request.per_page,
        })
    }

    fn search(&self, query: &str) -> Result<Vec<Note>> {
        let needle = query.to_lowercase();
        let state = self.lock()?;
        Ok(state
            .notes
            .values()
            .filter(|note| note.matches(&needle))
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lock()?.notes.len())
    }
}
