use chrono::{TimeZone, Utc};
use notesapp::error::NotesError;
use notesapp::model::Note;
use notesapp::store::backend::StorageBackend;
use notesapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("notes.json"));
    (dir, backend)
}

fn fixed_note(id: u64, title: &str) -> Note {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Note {
        id,
        title: title.to_string(),
        content: format!("content of {}", title),
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn test_empty_file_loads_empty() {
    let (_dir, backend) = setup();
    fs::write(backend.path(), "").unwrap();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let (_dir, backend) = setup();
    let notes = vec![fixed_note(1, "One"), fixed_note(2, "Two")];

    backend.save(&notes).unwrap();
    assert_eq!(backend.load().unwrap(), notes);
}

#[test]
fn test_file_is_a_json_array_of_notes() {
    let (_dir, backend) = setup();
    backend.save(&[fixed_note(1, "One")]).unwrap();

    let raw = fs::read_to_string(backend.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().expect("top level should be an array");
    assert_eq!(array.len(), 1);

    let object = array[0].as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["content", "created_at", "id", "title", "updated_at"]
    );
    assert_eq!(object["id"], 1);
    assert_eq!(object["created_at"], "2024-05-01T12:00:00Z");
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    backend.save(&[fixed_note(1, "One")]).unwrap();
    backend.save(&[fixed_note(1, "One"), fixed_note(2, "Two")]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("notes.json");
    let backend = FsBackend::new(&path);

    backend.save(&[fixed_note(1, "One")]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let (_dir, backend) = setup();
    backend
        .save(&[fixed_note(1, "One"), fixed_note(2, "Two")])
        .unwrap();
    backend.save(&[fixed_note(2, "Two")]).unwrap();

    let loaded = backend.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, backend) = setup();
    fs::write(backend.path(), "{ not json").unwrap();
    assert!(matches!(
        backend.load(),
        Err(NotesError::Serialization(_))
    ));
}

#[test]
fn test_location_is_the_file_path() {
    let (dir, backend) = setup();
    assert_eq!(
        backend.location(),
        dir.path().join("notes.json").display().to_string()
    );
}
