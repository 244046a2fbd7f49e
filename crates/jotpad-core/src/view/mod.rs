//! Presentation layer
//!
//! Views render what the controller pushes to them and turn user gestures
//! into [`NoteEvent`]s. They never touch persistence. The controller receives
//! events through the [`NoteHandlers`] interface.

mod editor;
mod list;
mod panel;

pub use editor::NoteEditorView;
pub use list::{NoteListItem, NoteListView, MAX_BODY_PREVIEW_CHARS};
pub use panel::NotesPanel;

use crate::models::Note;

/// A user intent emitted by a view.
///
/// Ids travel as text, the way they come back out of rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    Select(String),
    Add,
    Edit { title: String, body: String },
    Delete(String),
}

impl NoteEvent {
    /// Route this event to the matching handler
    pub fn dispatch<H: NoteHandlers + ?Sized>(self, handlers: &mut H) -> Result<(), H::Error> {
        match self {
            Self::Select(id) => handlers.on_note_select(&id),
            Self::Add => handlers.on_note_add(),
            Self::Edit { title, body } => handlers.on_note_edit(&title, &body),
            Self::Delete(id) => handlers.on_note_delete(&id),
        }
    }
}

/// Receiver of the intents a view emits
pub trait NoteHandlers {
    type Error;

    fn on_note_select(&mut self, id: &str) -> Result<(), Self::Error>;
    fn on_note_add(&mut self) -> Result<(), Self::Error>;
    fn on_note_edit(&mut self, title: &str, body: &str) -> Result<(), Self::Error>;
    fn on_note_delete(&mut self, id: &str) -> Result<(), Self::Error>;
}

/// Blocking yes/no question put to the user
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// What the controller pushes into the presentation layer
pub trait NotesView {
    /// Replace the rendered list
    fn update_note_list(&mut self, notes: &[Note]);

    /// Populate the editor and move the selection highlight
    fn update_active_note(&mut self, note: &Note);

    /// Show or hide the editor pane
    fn update_note_preview_visibility(&mut self, visible: bool);
}
