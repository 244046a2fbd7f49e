//! Key-value store abstraction the note repository persists through.
//!
//! A store holds serialized documents under string keys. It knows nothing
//! about notes; the repository owns the document format.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Opaque get/set persistence of whole documents.
pub trait Store {
    /// Read the document stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    ///
    /// The write must be visible to the next `get` once this returns.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
