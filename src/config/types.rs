//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DomainConfig, DuplicateRoutePolicy};
use crate::error::ServerlessUiResult;

use super::loader;

/// Deploy inputs that can be set in a file instead of on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Directory scanned for API entry files
    #[serde(default = "default_functions_dir")]
    pub functions: PathBuf,

    /// Built UI bundle directory
    #[serde(default = "default_ui_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub next_app: bool,

    #[serde(default)]
    pub private_s3: bool,

    #[serde(default)]
    pub duplicate_routes: DuplicateRoutePolicy,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            functions: default_functions_dir(),
            dir: default_ui_dir(),
            next_app: false,
            private_s3: false,
            duplicate_routes: DuplicateRoutePolicy::default(),
        }
    }
}

fn default_functions_dir() -> PathBuf {
    PathBuf::from("./functions")
}

fn default_ui_dir() -> PathBuf {
    PathBuf::from("./dist")
}

/// Function runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Environment variables set on every function
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
}

/// Provisioner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Where synthesized plan documents are written
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Total attempts for transient failures (0 is treated as 1)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ProvisionConfig {
    pub fn effective_max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("cdk.out")
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    250
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Custom domain triple. Taken as a unit from whichever file is loaded.
    #[serde(default)]
    pub domain: DomainConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub provision: ProvisionConfig,
}

impl Config {
    /// Domain triple, or `None` when the file set none of its fields
    pub fn domain(&self) -> Option<&DomainConfig> {
        (!self.domain.is_empty()).then_some(&self.domain)
    }

    /// Write the `[domain]` table into a config file, keeping other settings
    pub fn save_domain(config_path: &Path, domain: &DomainConfig) -> ServerlessUiResult<()> {
        loader::save_domain(config_path, domain)
    }
}
