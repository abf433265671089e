//! DeployMode value object - which topology the compiler builds

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// Deployment topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeployMode {
    /// Public storage for assets, one function per API entry
    #[default]
    #[serde(rename = "static+api")]
    Static,
    /// A single app function serves every path
    NextApp,
    /// Same as `Static`, storage readable by the CDN identity only
    PrivateStorage,
}

impl DeployMode {
    /// Resolve the mode from the two caller flags
    pub fn from_flags(is_next_app: bool, is_private_s3: bool) -> Result<Self, CompileError> {
        match (is_next_app, is_private_s3) {
            (true, true) => Err(CompileError::configuration(
                "next-app and private-s3 modes are mutually exclusive",
            )),
            (true, false) => Ok(Self::NextApp),
            (false, true) => Ok(Self::PrivateStorage),
            (false, false) => Ok(Self::Static),
        }
    }

    /// Whether API entries become their own functions and routes
    pub fn routes_api_entries(&self) -> bool {
        !matches!(self, Self::NextApp)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static+api",
            Self::NextApp => "next-app",
            Self::PrivateStorage => "private-storage",
        }
    }
}

impl std::fmt::Display for DeployMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
