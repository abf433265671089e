//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_id_generator;
pub mod deploy_events;
pub mod entry_discovery;
pub mod provisioner;

pub use build_id_generator::{BuildIdGenerator, FixedBuildIdGenerator};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use entry_discovery::{EntryDiscovery, StaticEntryDiscovery};
pub use provisioner::{ProvisionError, Provisioner, ProvisionerResult};
