//! ServerlessUI - deployment topology compiler
//!
//! Turns a build description (built UI directory, API entry files, custom
//! domain settings, mode flags) into a `DeploymentPlan` with one CDN in
//! front of static storage and serverless functions, then hands the plan to
//! a `Provisioner`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployResult, DeployUseCase};
pub use config::Config;
pub use domain::entities::{BuildContext, DeploymentPlan, NamedOutput};
pub use domain::ports::{Provisioner, ProvisionError, ProvisionerResult};
pub use domain::services::{
    DomainDecision, DomainResolver, EntryResolver, OutputFormatter, TopologyCompiler,
};
pub use error::{CompileError, ServerlessUiError, ServerlessUiResult};
