//! JSON file backing for the credential store.
//!
//! The file holds the same two keys the browser keeps in `localStorage`.
//! Writes go to memory; [`FileStore::flush`] persists them.

#[cfg(test)]
#[path = "state_file_test.rs"]
mod state_file_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quiz::store::{CredentialStore, MemoryStore};

use crate::error::CliError;

const DEFAULT_DIR: &str = ".quiz-portal";
const DEFAULT_FILE: &str = "session.json";

/// `$HOME/.quiz-portal/session.json`, or a relative path without `HOME`.
pub fn default_state_file() -> PathBuf {
    let base = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    base.join(DEFAULT_DIR).join(DEFAULT_FILE)
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: MemoryStore,
}

impl FileStore {
    /// Load the state file; a missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files or invalid JSON.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => MemoryStore::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == ErrorKind::NotFound => MemoryStore::new(),
            Err(source) => return Err(state_error(&path, source)),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current entries, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn flush(&self) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| state_error(parent, source))?;
        }
        let rendered = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, rendered).map_err(|source| state_error(&self.path, source))?;
        tracing::debug!(path = %self.path.display(), "state file written");
        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.set(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

fn state_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::StateFile { path: path.display().to_string(), source }
}
