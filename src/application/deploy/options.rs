//! Deploy Options
//!
//! Inputs for the deploy use case, usually built from the merged config.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::domain::entities::DEFAULT_UI_ENTRY;
use crate::domain::value_objects::{DomainConfig, DuplicateRoutePolicy};

/// Default directory scanned for API entry files
pub const DEFAULT_FUNCTIONS_DIR: &str = "./functions";

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Directory scanned for API entries
    pub functions_dir: PathBuf,
    /// Explicit entries; skips discovery when set
    pub api_entries: Option<Vec<PathBuf>>,
    /// Built UI directory
    pub ui_entry: PathBuf,
    pub production: bool,
    pub next_app: bool,
    pub private_s3: bool,
    /// Custom domain triple (possibly partial)
    pub domain: Option<DomainConfig>,
    pub api_environment: BTreeMap<String, String>,
    pub duplicate_routes: DuplicateRoutePolicy,
    /// Compile only; never call the provisioner
    pub dry_run: bool,
    /// Total provisioning attempts (at least 1)
    pub max_attempts: u32,
    /// Pause between attempts
    pub retry_delay: Duration,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployOptions {
    pub fn new() -> Self {
        Self {
            functions_dir: PathBuf::from(DEFAULT_FUNCTIONS_DIR),
            api_entries: None,
            ui_entry: PathBuf::from(DEFAULT_UI_ENTRY),
            production: false,
            next_app: false,
            private_s3: false,
            domain: None,
            api_environment: BTreeMap::new(),
            duplicate_routes: DuplicateRoutePolicy::default(),
            dry_run: false,
            max_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }

    /// Options seeded from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            functions_dir: config.deploy.functions.clone(),
            ui_entry: config.deploy.dir.clone(),
            next_app: config.deploy.next_app,
            private_s3: config.deploy.private_s3,
            domain: config.domain().cloned(),
            api_environment: config.api.environment.clone(),
            duplicate_routes: config.deploy.duplicate_routes,
            max_attempts: config.provision.effective_max_attempts(),
            retry_delay: Duration::from_millis(config.provision.retry_delay_ms),
            ..Self::new()
        }
    }

    pub fn with_functions_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.functions_dir = dir.into();
        self
    }

    pub fn with_api_entries<I, P>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.api_entries = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ui_entry(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ui_entry = dir.into();
        self
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn with_next_app(mut self, enabled: bool) -> Self {
        self.next_app = enabled;
        self
    }

    pub fn with_private_s3(mut self, enabled: bool) -> Self {
        self.private_s3 = enabled;
        self
    }

    pub fn with_domain(mut self, domain: DomainConfig) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_api_environment(mut self, environment: BTreeMap<String, String>) -> Self {
        self.api_environment = environment;
        self
    }

    pub fn with_duplicate_routes(mut self, policy: DuplicateRoutePolicy) -> Self {
        self.duplicate_routes = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}
