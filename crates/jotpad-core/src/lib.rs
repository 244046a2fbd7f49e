//! jotpad-core - Core library for jotpad
//!
//! This crate contains the note model, the key-value store seam, the note
//! repository, the app controller, and the list/editor views shared by every
//! jotpad front end.

pub mod controller;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod util;
pub mod view;

pub use controller::AppController;
pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId};
pub use repository::{NoteRepository, StoreNoteRepository};
pub use store::{FileStore, MemoryStore, Store};
