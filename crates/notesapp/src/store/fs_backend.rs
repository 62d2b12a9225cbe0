use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file backend: one file holding an array of notes.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(NotesError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let notes: Vec<Note> =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(notes).map_err(NotesError::Serialization)?;

        // Atomic write: temp file in the same directory, then rename
        let tmp_file = dir.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
