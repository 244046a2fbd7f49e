use std::io::Write;

use crate::commands::common::{format_list_lines, note_to_json_item, open_controller, StoreLocation};
use crate::error::CliError;

pub fn run_list<W: Write>(
    as_json: bool,
    location: &StoreLocation<'_>,
    out: &mut W,
) -> Result<(), CliError> {
    let controller = open_controller(location)?;

    if as_json {
        let items = controller
            .notes()
            .iter()
            .map(note_to_json_item)
            .collect::<Vec<_>>();
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    } else {
        for line in format_list_lines(controller.view().list().items()) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
