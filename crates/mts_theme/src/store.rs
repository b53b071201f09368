//! Persisted preference storage

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashMap;
use toml::{Table, Value};
use tracing::warn;

use crate::StoreError;

/// Key/value storage for the persisted preference
///
/// The runtime reads once at startup and writes on every explicit preference
/// change. Each write is fully determined by the caller's value.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store; clones share the same entries
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store backed by a TOML table on disk
///
/// ```toml
/// mts-theme = "dark"
/// ```
///
/// A missing file reads as empty. Other keys in the file are preserved with
/// their types, so the table can be shared with other settings. Writes
/// replace the file through a temporary sibling so a crash never leaves a
/// half-written table. A file that does not parse is replaced on the next
/// write by a table holding only the written entry.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load(&self) -> Result<Table, StoreError> {
        let src = match fs::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Table::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        toml::from_str(&src).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Table to write into; an unparseable file starts over
    fn load_for_write(&self) -> Result<Table, StoreError> {
        match self.load() {
            Err(e @ StoreError::Decode { .. }) => {
                warn!("FileStore: replacing unreadable table: {}", e);
                Ok(Table::new())
            }
            other => other,
        }
    }

    fn save(&self, table: &Table) -> Result<(), StoreError> {
        let body = toml::to_string(table)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl PreferenceStore for FileStore {
    /// Non-string values under `key` read as absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.load_for_write()?;
        table.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&table)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut table = match self.load() {
            Ok(table) => table,
            Err(e @ StoreError::Decode { .. }) => {
                warn!("FileStore: replacing unreadable table: {}", e);
                return self.save(&Table::new());
            }
            Err(e) => return Err(e),
        };
        if table.remove(key).is_none() {
            return Ok(());
        }
        self.save(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();

        writer.set("mts-theme", "dark").unwrap();
        assert_eq!(store.get("mts-theme").unwrap().as_deref(), Some("dark"));

        writer.remove("mts-theme").unwrap();
        assert!(!store.contains_key("mts-theme"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("prefs.toml"));

        assert_eq!(store.get("mts-theme").unwrap(), None);

        store.set("mts-theme", "light").unwrap();
        store.set("other", "kept").unwrap();
        assert_eq!(store.get("mts-theme").unwrap().as_deref(), Some("light"));

        store.remove("mts-theme").unwrap();
        assert_eq!(store.get("mts-theme").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));

        // Removing an absent key is a no-op.
        store.remove("mts-theme").unwrap();
    }

    #[test]
    fn test_file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("mts-theme"),
            Err(StoreError::Decode { .. })
        ));
    }

    #[test]
    fn test_file_store_keeps_foreign_keys_and_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "window-width = 1280\n").unwrap();

        let mut store = FileStore::new(&path);
        store.set("mts-theme", "dark").unwrap();
        assert_eq!(store.get("mts-theme").unwrap().as_deref(), Some("dark"));
        // Non-string values are not preferences.
        assert_eq!(store.get("window-width").unwrap(), None);

        let table: Table = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table.get("window-width"), Some(&Value::Integer(1280)));

        store.remove("mts-theme").unwrap();
        let table: Table = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key("window-width"));
    }

    #[test]
    fn test_file_store_writes_replace_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FileStore::new(&path);
        store.set("mts-theme", "light").unwrap();
        assert_eq!(store.get("mts-theme").unwrap().as_deref(), Some("light"));
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "mts-theme = \"light\"");

        fs::write(&path, "this is = = not toml").unwrap();
        store.remove("mts-theme").unwrap();
        assert_eq!(store.get("mts-theme").unwrap(), None);
    }
}
