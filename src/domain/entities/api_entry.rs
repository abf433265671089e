//! ApiEntry entity - a backend route paired with its source file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Path prefix every API route is mounted under
pub const API_PREFIX: &str = "/api";

/// A resolved API entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiEntry {
    source_path: PathBuf,
    route_name: String,
}

impl ApiEntry {
    /// Create an entry. Callers go through `EntryResolver`, which derives
    /// `route_name` from `source_path`.
    pub(crate) fn new(source_path: PathBuf, route_name: String) -> Self {
        Self {
            source_path,
            route_name,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// The public path this entry is served at (`/api/{route_name}`)
    pub fn api_path(&self) -> String {
        api_path(&self.route_name)
    }
}

/// Build the `/api/{route_name}` path for a route
pub fn api_path(route_name: &str) -> String {
    format!("{}/{}", API_PREFIX, route_name)
}
