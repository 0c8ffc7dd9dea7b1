use super::{ContactStore, StoredEntry};
use crate::error::{AddressBookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddressBookError::Io)?;
            }
        }
        Ok(())
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> Result<Vec<StoredEntry>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "contacts file absent, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AddressBookError::Io)?;
        let entries: Vec<StoredEntry> =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(entries)
    }

    fn save(&mut self, entries: &[StoredEntry]) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(entries).map_err(AddressBookError::Serialization)?;
        fs::write(&self.path, content).map_err(AddressBookError::Io)?;
        Ok(())
    }
}
