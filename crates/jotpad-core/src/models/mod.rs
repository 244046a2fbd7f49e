//! Data models for jotpad

mod note;
mod timestamp;

pub use note::{Note, NoteDraft, NoteId};
pub use timestamp::{clamp_storable, now_millis};
