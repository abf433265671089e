//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//! - `terminal` - Color and unicode detection

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;

pub use cli::{Cli, ColorWhen, Commands, ConfigureDomainArgs, DeployArgs};
pub use factory::{create_configure_domain_use_case, create_deploy_use_case, create_event_sink};
pub use output::{DeployResultRenderer, JsonRenderer, OutputFormat, TextRenderer};
