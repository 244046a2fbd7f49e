//! Note repository implementation
//!
//! The whole collection lives in one JSON array under one store key. Every
//! mutation is a full read-modify-write of that array.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::models::{clamp_storable, now_millis, Note, NoteDraft, NoteId};
use crate::store::Store;

/// Key the collection is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "notesapp-notes";

/// Trait for note storage operations
pub trait NoteRepository {
    /// All notes, most recently updated first
    fn list_all(&self) -> Result<Vec<Note>>;

    /// Overwrite the note matching `draft.id`, or create a new one
    fn save(&mut self, draft: NoteDraft) -> Result<Note>;

    /// Remove a note; unknown ids are ignored
    fn delete(&mut self, id: NoteId) -> Result<()>;
}

/// [`Store`]-backed implementation of `NoteRepository`
#[derive(Debug)]
pub struct StoreNoteRepository<S> {
    store: S,
    key: String,
}

impl<S: Store> StoreNoteRepository<S> {
    /// Create a repository over `store` using [`DEFAULT_STORAGE_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a repository over `store` using a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the collection is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored collection in stored order.
    ///
    /// Absent, unreadable, or malformed documents all read as empty.
    fn read_collection(&self) -> Vec<Note> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read notes from store, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!("Stored notes are malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn write_collection(&mut self, notes: &[Note]) -> Result<()> {
        let serialized = serde_json::to_string(notes)?;
        self.store.set(&self.key, &serialized)
    }
}

impl<S: Store> NoteRepository for StoreNoteRepository<S> {
    fn list_all(&self) -> Result<Vec<Note>> {
        let mut notes = self.read_collection();
        sort_by_recency(&mut notes);
        Ok(notes)
    }

    fn save(&mut self, draft: NoteDraft) -> Result<Note> {
        let mut notes = self.list_all()?;
        let updated = next_timestamp(&notes, draft.id, now_millis());
        let existing = draft
            .id
            .and_then(|id| notes.iter().position(|note| note.id == id));

        let saved = match existing {
            Some(index) => {
                let mut note = notes.remove(index);
                note.title = draft.title;
                note.body = draft.body;
                note.updated = updated;
                tracing::debug!("Updated note {}", note.id);
                note
            }
            None => {
                let note = Note {
                    id: next_id(&notes)?,
                    title: draft.title,
                    body: draft.body,
                    updated,
                };
                tracing::debug!("Created note {}", note.id);
                note
            }
        };

        // Leading the stored order keeps the saved note first on a clamped tie
        notes.insert(0, saved.clone());
        self.write_collection(&notes)?;
        Ok(saved)
    }

    fn delete(&mut self, id: NoteId) -> Result<()> {
        let mut notes = self.list_all()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);

        if notes.len() == before {
            tracing::debug!("Delete of unknown note {} ignored", id);
        } else {
            tracing::debug!("Deleted note {}", id);
        }

        self.write_collection(&notes)
    }
}

/// Stable sort, newest first; equal timestamps keep stored order.
fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated.cmp(&a.updated));
}

/// One past the largest id in the collection, starting at 1.
///
/// When the largest id is `i64::MAX` the smallest unused positive id is
/// handed out instead.
fn next_id(notes: &[Note]) -> Result<NoteId> {
    let Some(largest) = notes.iter().map(|note| note.id).max() else {
        return Ok(NoteId::new(1));
    };
    if let Some(id) = largest.next() {
        return Ok(id);
    }

    let taken: HashSet<NoteId> = notes.iter().map(|note| note.id).collect();
    (1..=i64::MAX)
        .map(NoteId::new)
        .find(|id| !taken.contains(id))
        .ok_or_else(|| Error::Storage("No unused note id left".to_string()))
}

/// Timestamp for a save that is strictly newer than every other note, unless
/// that would pass the latest storable instant.
fn next_timestamp(notes: &[Note], saving: Option<NoteId>, now: DateTime<Utc>) -> DateTime<Utc> {
    let stamp = notes
        .iter()
        .filter(|note| Some(note.id) != saving)
        .map(|note| note.updated)
        .max()
        .map_or(now, |newest| now.max(newest + Duration::milliseconds(1)));
    clamp_storable(stamp)
}
