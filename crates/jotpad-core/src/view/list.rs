//! Note list view

use super::{Confirm, NoteEvent};
use crate::models::{Note, NoteId};
use crate::util::format_updated;

/// Maximum body characters shown in a list item
pub const MAX_BODY_PREVIEW_CHARS: usize = 60;

/// One rendered row of the note list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub updated_label: String,
    pub selected: bool,
}

impl NoteListItem {
    /// Build a row using the local time zone for the updated label
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            preview: note.body_preview(MAX_BODY_PREVIEW_CHARS),
            updated_label: format_updated(&note.updated),
            selected: false,
        }
    }
}

/// Sidebar list of notes
#[derive(Debug, Clone, Default)]
pub struct NoteListView {
    items: Vec<NoteListItem>,
}

impl NoteListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered rows, in display order
    pub fn items(&self) -> &[NoteListItem] {
        &self.items
    }

    /// The highlighted row, if any
    pub fn selected(&self) -> Option<&NoteListItem> {
        self.items.iter().find(|item| item.selected)
    }

    /// Rebuild every row; nothing is selected afterwards
    pub fn set_notes(&mut self, notes: &[Note]) {
        self.items = notes.iter().map(NoteListItem::from_note).collect();
    }

    /// Mark the row with `id` as selected and clear every other row
    pub fn set_selected(&mut self, id: NoteId) {
        for item in &mut self.items {
            item.selected = item.id == id;
        }
    }

    /// Row click
    pub fn click_item(&self, id: &str) -> Option<NoteEvent> {
        self.find(id)
            .map(|item| NoteEvent::Select(item.id.to_string()))
    }

    /// Delete-control click. Asks for confirmation naming the note; a
    /// declined confirmation emits nothing.
    pub fn click_delete<C: Confirm + ?Sized>(&self, id: &str, confirm: &mut C) -> Option<NoteEvent> {
        let item = self.find(id)?;
        let message = format!(
            "Are you sure you want to delete this note? \"{}\"",
            item.title
        );

        if confirm.confirm(&message) {
            Some(NoteEvent::Delete(item.id.to_string()))
        } else {
            tracing::debug!("Delete of note {} declined", item.id);
            None
        }
    }

    /// "New Note" click
    pub const fn click_add(&self) -> NoteEvent {
        NoteEvent::Add
    }

    fn find(&self, id: &str) -> Option<&NoteListItem> {
        let id = id.parse::<NoteId>().ok()?;
        self.items.iter().find(|item| item.id == id)
    }
}
