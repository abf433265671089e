//! Entry Discovery Port
//!
//! Finds API entry files when the caller names a functions directory
//! instead of listing files.

use std::path::{Path, PathBuf};

/// Lists API entry source files
pub trait EntryDiscovery: Send + Sync {
    /// Entry files under `root`, in a stable order. A missing root yields none.
    fn discover(&self, root: &Path) -> std::io::Result<Vec<PathBuf>>;
}

/// Returns a fixed list regardless of root
#[derive(Debug, Clone, Default)]
pub struct StaticEntryDiscovery(pub Vec<PathBuf>);

impl EntryDiscovery for StaticEntryDiscovery {
    fn discover(&self, _root: &Path) -> std::io::Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}
