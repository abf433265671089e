//! NamedOutput entity - one user-facing deployment output

use serde::{Deserialize, Serialize};

/// Name of the site root output
pub const BASE_URL_OUTPUT: &str = "Base Url";

/// Prefix of per-function outputs
pub const FUNCTION_PATH_OUTPUT: &str = "Function Path";

/// A named output value, such as a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOutput {
    pub name: String,
    pub value: String,
}

impl NamedOutput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Output name for a function route: `Function Path - {route_name}`
    pub fn function_path_name(route_name: &str) -> String {
        format!("{} - {}", FUNCTION_PATH_OUTPUT, route_name)
    }
}
