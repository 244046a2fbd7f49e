use std::io::{BufRead, Write};

use crate::commands::common::{open_controller, StoreLocation};
use crate::error::CliError;
use crate::shell::Shell;

pub fn run_shell<R: BufRead, W: Write>(
    assume_yes: bool,
    location: &StoreLocation<'_>,
    input: R,
    out: W,
) -> Result<(), CliError> {
    let mut controller = open_controller(location)?;
    tracing::info!(
        "Opened {} notes from {}",
        controller.notes().len(),
        location.data_dir.display()
    );

    Shell::new(input, out, assume_yes).run(&mut controller)
}
