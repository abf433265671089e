//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `build_id` - Random preview build ids
//! - `discovery` - API entry discovery on disk
//! - `events` - Event sinks (console, NDJSON)
//! - `fs` - Atomic file writes
//! - `provisioner` - Provisioner implementations

pub mod build_id;
pub mod discovery;
pub mod events;
pub mod fs;
pub mod provisioner;

// Re-export for convenience
pub use build_id::RandomBuildIdGenerator;
pub use discovery::FsEntryDiscovery;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use provisioner::SynthProvisioner;
