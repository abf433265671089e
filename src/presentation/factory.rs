//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{ConfigureDomainUseCase, DeployUseCase};
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{
    ConsoleEventSink, FsEntryDiscovery, JsonEventSink, RandomBuildIdGenerator, SynthProvisioner,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<SynthProvisioner, RandomBuildIdGenerator, FsEntryDiscovery>;

/// Type alias for the concrete ConfigureDomainUseCase
pub type ConcreteConfigureDomainUseCase = ConfigureDomainUseCase<SynthProvisioner>;

/// Create a deploy use case that synthesizes plans into `out_dir`
pub fn create_deploy_use_case(out_dir: impl Into<PathBuf>) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        SynthProvisioner::new(out_dir),
        RandomBuildIdGenerator::new(),
        FsEntryDiscovery::new(),
    )
}

/// Create a configure-domain use case that synthesizes into `out_dir`
pub fn create_configure_domain_use_case(
    out_dir: impl Into<PathBuf>,
) -> ConcreteConfigureDomainUseCase {
    ConfigureDomainUseCase::new(SynthProvisioner::new(out_dir))
}

/// NDJSON on stdout for `--json`, progress lines on stderr otherwise
pub fn create_event_sink(json: bool, verbose: u8, unicode: bool) -> Arc<dyn DeployEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(verbose, unicode))
    }
}
