//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::DeployMode;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        stack_name: String,
        mode: DeployMode,
        production: bool,
        /// `Provisioner::name` of the backend doing the work
        provisioner: String,
    },

    /// Entry files resolved into routes
    EntriesResolved { count: usize },

    /// Plan compiled
    Compiled {
        compute_count: usize,
        route_count: usize,
        alias: Option<String>,
    },

    /// A provisioning attempt is starting
    ProvisionAttempt { attempt: u32, max_attempts: u32 },

    /// A transient failure; another attempt follows
    ProvisionRetry { attempt: u32, error: String },

    /// Provisioning finished
    Provisioned { assigned_domain: String },

    /// Something worth surfacing that does not stop the deploy
    Warning { message: String },

    /// Deploy completed
    Completed { output_count: usize, dry_run: bool },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (e.g., per-attempt)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
