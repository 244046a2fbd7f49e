use std::io::Write;

use crate::commands::common::{open_controller, StoreLocation};
use crate::commands::edit::apply_fields;
use crate::error::CliError;

pub fn run_add<W: Write>(
    title: Option<&str>,
    body: Option<&str>,
    location: &StoreLocation<'_>,
    out: &mut W,
) -> Result<(), CliError> {
    let mut controller = open_controller(location)?;

    let add = controller.view().list().click_add();
    controller.dispatch(add)?;

    if title.is_some() || body.is_some() {
        apply_fields(&mut controller, title, body)?;
    }

    if let Some(note) = controller.active_note() {
        writeln!(out, "{}", note.id)?;
    }
    Ok(())
}
