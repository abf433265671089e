//! Domain Layer
//!
//! This is the core of ServerlessUI - pure deployment planning without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ApiEntry, BuildContext, DeploymentPlan)
//! - `value_objects/` - Immutable value types (BuildId, DomainConfig, DeployMode)
//! - `services/` - Domain services (EntryResolver, DomainResolver, TopologyCompiler, OutputFormatter)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
