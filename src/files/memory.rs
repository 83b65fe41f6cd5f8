use crate::error::Result;
use crate::files::FileStore;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory store for testing without touching the filesystem
#[derive(Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: BTreeSet<PathBuf>,
    writes: RefCell<Vec<PathBuf>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.get_mut().insert(path.into(), contents.into());
    }

    /// Make writes to `path` fail with a permission error
    pub fn deny_writes(&mut self, path: impl Into<PathBuf>) {
        self.read_only.insert(path.into());
    }

    /// Current contents of a file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
            .into()
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if self.read_only.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            )
            .into());
        }
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic() {
        let mut store = MemoryStore::new();
        store.insert("package.json", "{}");

        assert_eq!(store.read(Path::new("package.json")).unwrap(), "{}");
        store.write(Path::new("package.json"), "{ }").unwrap();
        assert_eq!(store.get("package.json").as_deref(), Some("{ }"));
        assert_eq!(store.writes(), vec![PathBuf::from("package.json")]);
    }

    #[test]
    fn test_memory_store_missing_file() {
        let store = MemoryStore::new();
        assert!(store.read(Path::new("bower.json")).is_err());
    }

    #[test]
    fn test_memory_store_denied_write() {
        let mut store = MemoryStore::new();
        store.insert("bower.json", "{}");
        store.deny_writes("bower.json");

        assert!(store.write(Path::new("bower.json"), "[]").is_err());
        assert_eq!(store.get("bower.json").as_deref(), Some("{}"));
        assert!(store.writes().is_empty());
    }
}
