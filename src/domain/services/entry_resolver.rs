//! Entry resolution service
//!
//! Turns raw entry file paths into named routes. The route name is the file
//! name with its final extension removed, so `functions/hello.ts` serves
//! `/api/hello`.

use std::path::Path;

use crate::domain::entities::ApiEntry;
use crate::error::CompileError;

/// Pure entry resolver
pub struct EntryResolver;

impl EntryResolver {
    /// Resolve every path, preserving order.
    ///
    /// Duplicate route names are kept here; the compiler applies the
    /// duplicate-route policy.
    pub fn resolve<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ApiEntry>, CompileError> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let route_name = Self::route_name(path)?;
                Ok(ApiEntry::new(path.to_path_buf(), route_name))
            })
            .collect()
    }

    /// Derive the route name for a single path
    pub fn route_name(path: &Path) -> Result<String, CompileError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| CompileError::invalid_entry(path, "path has no file name"))?;
        let file_name = file_name
            .to_str()
            .ok_or_else(|| CompileError::invalid_entry(path, "file name is not valid UTF-8"))?;

        let stem = match file_name.rfind('.') {
            Some(idx) => &file_name[..idx],
            None => file_name,
        };

        if stem.is_empty() {
            return Err(CompileError::invalid_entry(path, "empty route name"));
        }
        Ok(stem.to_string())
    }
}
