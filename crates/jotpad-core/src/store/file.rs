//! Directory-backed store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Store;
use crate::error::{Error, Result};

/// Store that keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader sees either the previous document or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if it doesn't exist
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    /// Directory this store writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = self.dir.join(format!(".{key}.json.tmp"));

        let written = fs::write(&tmp_path, value).and_then(|()| fs::rename(&tmp_path, &path));
        written.map_err(|error| {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::debug!("Failed to remove {}: {}", tmp_path.display(), cleanup);
            }
            Error::Storage(format!(
                "Failed to replace {}: {}",
                path.display(),
                error
            ))
        })
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("Invalid storage key: {key:?}")))
    }
}
