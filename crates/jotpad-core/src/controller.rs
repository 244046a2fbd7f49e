//! App controller
//!
//! Holds the current note list and the active note, sends every mutation
//! through the repository, and re-renders the view after each one. Nothing is
//! patched in place: every mutation ends with a full [`AppController::refresh`].

use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId};
use crate::repository::NoteRepository;
use crate::view::{NoteEvent, NoteHandlers, NotesView};

/// Mediates between a [`NoteRepository`] and a [`NotesView`]
#[derive(Debug)]
pub struct AppController<R, V> {
    repository: R,
    view: V,
    notes: Vec<Note>,
    active_id: Option<NoteId>,
}

impl<R: NoteRepository, V: NotesView> AppController<R, V> {
    /// Create the controller and render whatever the repository holds
    pub fn new(repository: R, view: V) -> Result<Self> {
        let mut controller = Self {
            repository,
            view,
            notes: Vec::new(),
            active_id: None,
        };
        controller.refresh()?;
        Ok(controller)
    }

    /// Reload the list, re-render, and make the most recent note active
    pub fn refresh(&mut self) -> Result<()> {
        let notes = self.repository.list_all()?;
        tracing::debug!("Refreshed {} notes", notes.len());
        self.set_notes(notes);

        match self.notes.first().cloned() {
            Some(first) => self.set_active_note(&first),
            None => self.active_id = None,
        }
        Ok(())
    }

    /// Make the note with `id` active; unknown ids are ignored
    pub fn select_note(&mut self, id: NoteId) {
        match self.notes.iter().find(|note| note.id == id).cloned() {
            Some(note) => self.set_active_note(&note),
            None => tracing::debug!("Select of unknown note {} ignored", id),
        }
    }

    /// Create an empty note; it becomes the active note
    pub fn add_note(&mut self) -> Result<()> {
        self.repository.save(NoteDraft::empty())?;
        self.refresh()
    }

    /// Overwrite the active note's title and body
    pub fn edit_note(&mut self, title: &str, body: &str) -> Result<()> {
        let Some(id) = self.active_id else {
            tracing::warn!("Edit requested with no active note");
            return Err(Error::NoActiveNote);
        };

        self.repository.save(NoteDraft::for_note(id, title, body))?;
        self.refresh()
    }

    /// Delete a note; the most recent remaining note becomes active
    pub fn delete_note(&mut self, id: NoteId) -> Result<()> {
        self.repository.delete(id)?;
        self.refresh()
    }

    /// Route a view event to its handler
    pub fn dispatch(&mut self, event: NoteEvent) -> Result<()> {
        event.dispatch(self)
    }

    /// Notes as of the last refresh, most recent first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The note shown in the editor
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active_id?;
        self.notes.iter().find(|note| note.id == id)
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub const fn repository(&self) -> &R {
        &self.repository
    }

    fn set_notes(&mut self, notes: Vec<Note>) {
        self.view.update_note_list(&notes);
        self.view.update_note_preview_visibility(!notes.is_empty());
        self.notes = notes;
    }

    fn set_active_note(&mut self, note: &Note) {
        self.active_id = Some(note.id);
        self.view.update_active_note(note);
    }
}

impl<R: NoteRepository, V: NotesView> NoteHandlers for AppController<R, V> {
    type Error = Error;

    fn on_note_select(&mut self, id: &str) -> Result<()> {
        match id.parse() {
            Ok(id) => self.select_note(id),
            Err(_) => tracing::debug!("Ignoring select of malformed id {:?}", id),
        }
        Ok(())
    }

    fn on_note_add(&mut self) -> Result<()> {
        self.add_note()
    }

    fn on_note_edit(&mut self, title: &str, body: &str) -> Result<()> {
        self.edit_note(title, body)
    }

    fn on_note_delete(&mut self, id: &str) -> Result<()> {
        match id.parse() {
            Ok(id) => self.delete_note(id),
            Err(_) => {
                tracing::debug!("Ignoring delete of malformed id {:?}", id);
                Ok(())
            }
        }
    }
}
