//! The mounted interface: note list, "New Note" control, and editor pane.

use std::io::{self, Write};

use super::{NoteEditorView, NoteListView, NotesView};
use crate::models::Note;

const ADD_LABEL: &str = "New Note";
const BODY_PLACEHOLDER: &str = "Write here...";
const EMPTY_LIST_TEXT: &str = "No notes yet";
const UNTITLED: &str = "(untitled)";

/// List and editor views mounted together
#[derive(Debug, Clone, Default)]
pub struct NotesPanel {
    list: NoteListView,
    editor: NoteEditorView,
}

impl NotesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn list(&self) -> &NoteListView {
        &self.list
    }

    pub const fn editor(&self) -> &NoteEditorView {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut NoteEditorView {
        &mut self.editor
    }

    /// Write the whole interface into `out`
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "== Notes ==")?;
        if self.list.items().is_empty() {
            writeln!(out, "  {EMPTY_LIST_TEXT}")?;
        }
        for item in self.list.items() {
            let marker = if item.selected { '>' } else { ' ' };
            let title = if item.title.is_empty() {
                UNTITLED
            } else {
                item.title.as_str()
            };
            writeln!(out, "{marker} [{}] {title}", item.id)?;
            if !item.preview.is_empty() {
                writeln!(out, "      {}", item.preview.replace('\n', " "))?;
            }
            writeln!(out, "      {}", item.updated_label)?;
        }
        writeln!(out, "  [+] {ADD_LABEL}")?;

        if self.editor.is_visible() {
            writeln!(out)?;
            writeln!(out, "== Editor ==")?;
            writeln!(out, "Title: {}", self.editor.title())?;
            if self.editor.body().is_empty() {
                writeln!(out, "  {BODY_PLACEHOLDER}")?;
            } else {
                for line in self.editor.body().lines() {
                    writeln!(out, "  {line}")?;
                }
            }
        }

        Ok(())
    }

    /// Rendered interface as a string
    pub fn render_to_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl NotesView for NotesPanel {
    fn update_note_list(&mut self, notes: &[Note]) {
        self.list.set_notes(notes);
    }

    fn update_active_note(&mut self, note: &Note) {
        self.editor.populate(note);
        self.list.set_selected(note.id);
    }

    fn update_note_preview_visibility(&mut self, visible: bool) {
        self.editor.set_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;
    use chrono::Utc;

    fn note(id: i64, title: &str, body: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: title.to_string(),
            body: body.to_string(),
            updated: Utc::now(),
        }
    }

    #[test]
    fn empty_panel_hides_editor() {
        let panel = NotesPanel::new();
        let text = panel.render_to_string();
        assert!(text.contains(EMPTY_LIST_TEXT));
        assert!(text.contains(ADD_LABEL));
        assert!(!text.contains("== Editor =="));
    }

    #[test]
    fn renders_selection_marker_and_editor() {
        let mut panel = NotesPanel::new();
        let notes = vec![note(2, "Shopping", "milk"), note(1, "", "")];
        panel.update_note_list(&notes);
        panel.update_note_preview_visibility(true);
        panel.update_active_note(&notes[0]);

        let text = panel.render_to_string();
        assert!(text.contains("> [2] Shopping"));
        assert!(text.contains("  [1] (untitled)"));
        assert!(text.contains("Title: Shopping"));
        assert!(text.contains("  milk"));
    }

    #[test]
    fn empty_body_shows_placeholder() {
        let mut panel = NotesPanel::new();
        let notes = vec![note(1, "t", "")];
        panel.update_note_list(&notes);
        panel.update_note_preview_visibility(true);
        panel.update_active_note(&notes[0]);

        assert!(panel.render_to_string().contains(BODY_PLACEHOLDER));
    }

    #[test]
    fn update_active_note_does_not_emit() {
        let mut panel = NotesPanel::new();
        let notes = vec![note(1, "t", "b")];
        panel.update_note_list(&notes);
        panel.update_active_note(&notes[0]);
        // Editor still hidden, so populating it cannot produce an edit
        assert_eq!(panel.editor().blur(), None);
        assert_eq!(panel.list().selected().map(|i| i.id), Some(NoteId::new(1)));
    }
}
