//! Configuration module for ServerlessUI
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the command)
//! 2. Environment variables (SERVERLESSUI_*)
//! 3. Project config (./serverlessui.toml or --config)
//! 4. User config ({config_dir}/serverlessui/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only one file is ever loaded, so a `[domain]` table in a file replaces
//! rather than merges with one in a lower-priority file.

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, discover, user_config_path, ConfigWarning, LoadedConfig, ENV_PREFIX,
    PROJECT_CONFIG_FILE,
};
pub use types::{ApiConfig, Config, DeployConfig, ProvisionConfig};
