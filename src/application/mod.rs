//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain topology rules (those are in Domain)
//! - Owns retries, delays and event emission
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - discover, compile, provision, format outputs
//! - `ConfigureDomainUseCase` - bootstrap a hosted zone and certificate

pub mod configure_domain;
pub mod deploy;

pub use configure_domain::{ConfigureDomainResult, ConfigureDomainUseCase};
pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
