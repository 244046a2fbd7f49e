//! Note editor view

use super::NoteEvent;
use crate::models::Note;
use crate::util::normalize_field;

/// Title/body form for the active note.
///
/// Hidden until the controller reports at least one note.
#[derive(Debug, Clone, Default)]
pub struct NoteEditorView {
    title: String,
    body: String,
    visible: bool,
}

impl NoteEditorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Fill the fields from `note`. Programmatic, so nothing is emitted.
    pub fn populate(&mut self, note: &Note) {
        self.title.clone_from(&note.title);
        self.body.clone_from(&note.body);
    }

    /// User typed into the title field
    pub fn input_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// User typed into the body field
    pub fn input_body(&mut self, text: impl Into<String>) {
        self.body = text.into();
    }

    /// A field lost focus: submit both fields, trimmed.
    ///
    /// A hidden editor cannot hold focus, so it emits nothing.
    pub fn blur(&self) -> Option<NoteEvent> {
        if !self.visible {
            return None;
        }

        Some(NoteEvent::Edit {
            title: normalize_field(&self.title),
            body: normalize_field(&self.body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;
    use chrono::Utc;

    #[test]
    fn hidden_by_default() {
        let editor = NoteEditorView::new();
        assert!(!editor.is_visible());
        assert_eq!(editor.blur(), None);
    }

    #[test]
    fn blur_submits_both_fields_trimmed() {
        let mut editor = NoteEditorView::new();
        editor.set_visible(true);
        editor.input_title("  Hello ");
        editor.input_body("\n World\n\n");

        assert_eq!(
            editor.blur(),
            Some(NoteEvent::Edit {
                title: "Hello".to_string(),
                body: "World".to_string(),
            })
        );
    }

    #[test]
    fn populate_replaces_fields() {
        let mut editor = NoteEditorView::new();
        editor.input_title("draft");
        editor.populate(&Note {
            id: NoteId::new(1),
            title: "Stored".to_string(),
            body: "text".to_string(),
            updated: Utc::now(),
        });
        assert_eq!(editor.title(), "Stored");
        assert_eq!(editor.body(), "text");
    }
}
