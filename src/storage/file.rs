//! File-backed storage
//!
//! The whole store is one JSON object mapping keys to serialized values.
//! It is re-read on every access and rewritten on every change, so edits
//! made by another process show up on the next read.

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Result, Storage, StorageError};

type Items = IndexMap<String, String>;

/// JSON file acting as the blog's local storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Items> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::CorruptFile {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write(&self, items: &Items) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content =
            serde_json::to_string_pretty(items).map_err(|source| StorageError::EncodeFile {
                path: self.path.display().to_string(),
                source,
            })?;

        // Readers only ever see the old or the new file, never a partial one
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.shift_remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read()?;
        items.insert(key.to_string(), value.to_string());
        self.write(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.read()?;
        if items.shift_remove(key).is_some() {
            self.write(&items)?;
        }
        Ok(())
    }
}
