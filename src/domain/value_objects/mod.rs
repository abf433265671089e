//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_id;
mod config_warning;
mod deploy_mode;
mod domain_config;
mod duplicate_routes;

pub use build_id::BuildId;
pub use config_warning::ConfigWarning;
pub use deploy_mode::DeployMode;
pub use domain_config::{CompleteDomain, DomainConfig};
pub use duplicate_routes::DuplicateRoutePolicy;
