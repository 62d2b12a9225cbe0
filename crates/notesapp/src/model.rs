//! # Domain Model
//!
//! This module defines the core data structures: [`Note`] and the two input
//! shapes a client can send, [`NewNote`] and [`NotePatch`].
//!
//! ## Field Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `title` | Required on create. Trimmed, then 1 to 200 characters. |
//! | `content` | Required on create. Must not be empty. Stored verbatim. |
//!
//! Titles are stored in their trimmed form, so `"  Groceries "` becomes
//! `"Groceries"`. Content keeps its whitespace: a note body is the user's text.
//!
//! ## Partial Updates
//!
//! [`NotePatch`] distinguishes "field absent" from "field present":
//! - `None` keeps the previous value.
//! - `Some(value)` is validated with the same rules as creation and replaces it.
//!
//! A patch with no fields at all is a no-op (see [`NotePatch::is_empty`]).
//!
//! ## Timestamps
//!
//! `created_at` is set once. `updated_at` starts equal to it and moves forward
//! on every mutation via [`Note::touch`], which guarantees a strictly later
//! value even when two calls to the clock return the same instant.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{NotesError, Result};

/// Maximum title length, counted in characters after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a fresh note. Inputs are assumed to be validated already.
    pub fn new(id: u64, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`, always moving it forward.
    pub fn touch(&mut self) {
        let floor = self.updated_at + Duration::nanoseconds(1);
        self.updated_at = Utc::now().max(floor);
    }

    /// Case-insensitive substring match against title or content.
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

/// Payload for creating a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validate both fields, returning the normalized `(title, content)` pair.
    pub fn validate(self) -> Result<(String, String)> {
        let title = validate_title(&self.title)?;
        validate_content(&self.content)?;
        Ok((title, self.content))
    }
}

/// Payload for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Validate the supplied fields and apply them to `note`.
    ///
    /// Nothing is written to `note` unless every supplied field is valid.
    /// Returns `true` if the note changed.
    pub fn apply_to(&self, note: &mut Note) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }

        let title = self.title.as_deref().map(validate_title).transpose()?;
        if let Some(content) = &self.content {
            validate_content(content)?;
        }

        if let Some(title) = title {
            note.title = title;
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        note.touch();
        Ok(true)
    }
}

/// Trim and check a title. Returns the trimmed title.
pub fn validate_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(NotesError::validation("title must not be empty"));
    }
    let len = title.chars().count();
    if len > TITLE_MAX_CHARS {
        return Err(NotesError::validation(format!(
            "title must be at most {} characters (got {})",
            TITLE_MAX_CHARS, len
        )));
    }
    Ok(title.to_string())
}

pub fn validate_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(NotesError::validation("content must not be empty"));
    }
    Ok(())
}
