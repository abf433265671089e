//! Command handlers for the binary

pub mod configure_domain;
pub mod deploy;

use std::path::Path;

use anyhow::Result;
use serverlessui::config::{self, ConfigWarning, LoadedConfig};

/// Load the project config from the working directory and report warnings
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let project_root = std::env::current_dir()?;
    let loaded = config::discover(Some(&project_root), explicit)?;
    print_config_warnings(&loaded.warnings);
    Ok(loaded)
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("⚠ {}", w);
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
