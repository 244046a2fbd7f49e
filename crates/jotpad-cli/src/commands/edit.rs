use std::io::Write;

use jotpad_core::view::NotesPanel;
use jotpad_core::{AppController, NoteRepository};

use crate::commands::common::{open_controller, StoreLocation};
use crate::error::CliError;

pub fn run_edit<W: Write>(
    id: &str,
    title: Option<&str>,
    body: Option<&str>,
    location: &StoreLocation<'_>,
    out: &mut W,
) -> Result<(), CliError> {
    if title.is_none() && body.is_none() {
        return Err(CliError::NothingToEdit);
    }

    let mut controller = open_controller(location)?;
    let select = controller
        .view()
        .list()
        .click_item(id)
        .ok_or_else(|| CliError::NoteNotFound(id.to_string()))?;
    controller.dispatch(select)?;

    apply_fields(&mut controller, title, body)?;

    if let Some(note) = controller.active_note() {
        writeln!(out, "{}", note.id)?;
    }
    Ok(())
}

/// Type into the open note's fields, then leave the editor so the change is submitted.
pub fn apply_fields<R: NoteRepository>(
    controller: &mut AppController<R, NotesPanel>,
    title: Option<&str>,
    body: Option<&str>,
) -> Result<(), CliError> {
    let editor = controller.view_mut().editor_mut();
    if let Some(title) = title {
        editor.input_title(title);
    }
    if let Some(body) = body {
        editor.input_body(body);
    }

    if let Some(edit) = controller.view().editor().blur() {
        controller.dispatch(edit)?;
    }
    Ok(())
}
