use crate::error::Result;
use crate::files::FileStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed store rooted at the project directory
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store resolving relative paths against `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        FsStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        log::debug!("reading {}", full.display());
        Ok(fs::read_to_string(full)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        log::debug!("writing {} ({} bytes)", full.display(), contents.len());
        fs::write(full, contents)?;
        Ok(())
    }
}
