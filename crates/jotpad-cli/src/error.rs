use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] jotpad_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Note not found for id: {0}")]
    NoteNotFound(String),
    #[error("Nothing to change; pass --title and/or --body")]
    NothingToEdit,
    #[error("Configuration error: {0}")]
    Config(String),
}
