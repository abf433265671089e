//! Entry discovery on the local file system
//!
//! Equivalent of `{functions}/**/*.{js,ts}`, honoring `.gitignore`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::EntryDiscovery;

/// Source extensions treated as API entries
pub const ENTRY_EXTENSIONS: &[&str] = &["js", "ts"];

/// Walks a functions directory for entry files
#[derive(Debug, Clone, Copy, Default)]
pub struct FsEntryDiscovery;

impl FsEntryDiscovery {
    pub fn new() -> Self {
        Self
    }

    fn is_entry(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ENTRY_EXTENSIONS.contains(&ext))
            && !path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".d.ts"))
    }
}

impl EntryDiscovery for FsEntryDiscovery {
    fn discover(&self, root: &Path) -> std::io::Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for result in WalkBuilder::new(root).hidden(true).build() {
            let entry = result.map_err(std::io::Error::other)?;
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && Self::is_entry(entry.path()) {
                entries.push(entry.into_path());
            }
        }

        entries.sort();
        Ok(entries)
    }
}
