//! File access abstraction and version updaters
//!
//! The release workflow never touches the filesystem directly. It goes through
//! the [FileStore] trait, which has two implementations:
//!
//! - [store::FsStore]: reads and writes files below a project root
//! - [memory::MemoryStore]: an in-memory store for tests
//!
//! The [updaters] module holds the rewrite rules for each tracked file.

pub mod memory;
pub mod store;
pub mod updaters;

pub use memory::MemoryStore;
pub use store::FsStore;
pub use updaters::{
    read_manifest_version, replace_version_markers, update_docs_version, update_manifest_version,
    VersionMarker,
};

use crate::error::Result;
use std::path::Path;

/// Narrow file I/O capability used by the workflow.
///
/// Paths are relative to the project being released. Implementations decide
/// how they resolve them.
pub trait FileStore {
    /// Read a whole file as UTF-8 text
    ///
    /// # Returns
    /// * `Ok(String)` - File contents
    /// * `Err` - If the file is missing or unreadable
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace a file's contents
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the file cannot be written
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
