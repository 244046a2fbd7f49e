use std::path::Path;

use jotpad_core::view::{NoteListItem, NotesPanel};
use jotpad_core::{AppController, FileStore, Note, StoreNoteRepository};
use serde::Serialize;

use crate::error::CliError;

pub type FileController = AppController<StoreNoteRepository<FileStore>, NotesPanel>;

/// Where and under which key the notes document lives
#[derive(Debug, Clone)]
pub struct StoreLocation<'a> {
    pub data_dir: &'a Path,
    pub key: &'a str,
}

pub fn open_controller(location: &StoreLocation<'_>) -> Result<FileController, CliError> {
    let store = FileStore::open(location.data_dir)?;
    let repository = StoreNoteRepository::with_key(store, location.key);
    Ok(AppController::new(repository, NotesPanel::new())?)
}

#[derive(Debug, Serialize)]
pub struct NoteJsonItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub updated: String,
    pub updated_label: String,
}

pub fn note_to_json_item(note: &Note) -> NoteJsonItem {
    NoteJsonItem {
        id: note.id.value(),
        title: note.title.clone(),
        body: note.body.clone(),
        updated: note
            .updated
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        updated_label: NoteListItem::from_note(note).updated_label,
    }
}

pub fn format_list_lines(items: &[NoteListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let title = if item.title.is_empty() {
                "(untitled)"
            } else {
                item.title.as_str()
            };
            let preview = item.preview.replace('\n', " ");
            if preview.is_empty() {
                format!("{:<8}  {title:<30}  {}", item.id, item.updated_label)
            } else {
                format!(
                    "{:<8}  {title:<30}  {}  {preview}",
                    item.id, item.updated_label
                )
            }
        })
        .collect()
}
