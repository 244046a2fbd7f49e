//! Note model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a stored note.
///
/// Ids are plain integers in the persisted document. They are assigned by the
/// repository and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw integer id
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw integer value
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The id that follows this one, `None` past `i64::MAX`
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    /// Parses ids coming back from the UI as text; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Title line
    pub title: String,
    /// Free-form body text
    pub body: String,
    /// Last save time, drives list order
    #[serde(with = "super::timestamp")]
    pub updated: DateTime<Utc>,
}

impl Note {
    /// Body text cut to `max_chars` characters, with `...` appended when cut
    #[must_use]
    pub fn body_preview(&self, max_chars: usize) -> String {
        crate::util::truncate_with_ellipsis(&self.body, max_chars)
    }
}

/// The partial note handed to [`crate::NoteRepository::save`].
///
/// With an `id` that matches a stored note the save overwrites it; otherwise a
/// new note is created and the repository assigns its id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub body: String,
}

impl NoteDraft {
    /// A draft for a brand new, empty note
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A draft that overwrites the note with the given id
    #[must_use]
    pub fn for_note(id: NoteId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            body: body.into(),
        }
    }
}
