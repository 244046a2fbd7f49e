use std::io::{BufRead, Write};

use crate::commands::common::{open_controller, StoreLocation};
use crate::error::CliError;
use crate::shell::{AssumeYes, PromptConfirm};

pub fn run_delete<R: BufRead, W: Write>(
    id: &str,
    assume_yes: bool,
    location: &StoreLocation<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut controller = open_controller(location)?;
    let list = controller.view().list();

    if list.click_item(id).is_none() {
        return Err(CliError::NoteNotFound(id.to_string()));
    }

    let event = if assume_yes {
        list.click_delete(id, &mut AssumeYes)
    } else {
        list.click_delete(id, &mut PromptConfirm::new(input, out))
    };

    match event {
        Some(event) => {
            controller.dispatch(event)?;
            writeln!(out, "{}", id.trim())?;
        }
        None => writeln!(out, "Delete cancelled")?,
    }
    Ok(())
}
