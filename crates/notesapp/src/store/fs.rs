use super::fs_backend::FsBackend;
use super::note_store::NoteStore;
use crate::error::Result;
use std::path::Path;

/// Store mirrored to a single JSON file.
pub type FileStore = NoteStore<FsBackend>;

impl FileStore {
    /// Open the store at `path`, loading existing notes if the file exists.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        NoteStore::open(FsBackend::new(path))
    }

    pub fn path(&self) -> &Path {
        self.backend().path()
    }
}
