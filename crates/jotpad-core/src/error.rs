//! Error types for jotpad-core

use thiserror::Error;

/// Result type alias using jotpad-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jotpad-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Key-value store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An edit arrived while no note was active
    #[error("No active note to edit")]
    NoActiveNote,
}
