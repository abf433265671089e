//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render an event as its NDJSON object
pub fn event_to_json(event: DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            stack_name,
            mode,
            production,
            provisioner,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "stack": stack_name,
            "mode": mode.as_str(),
            "production": production,
            "provisioner": provisioner,
        }),

        DeployEvent::EntriesResolved { count } => serde_json::json!({
            "event": "entries_resolved",
            "command": "deploy",
            "count": count,
        }),

        DeployEvent::Compiled {
            compute_count,
            route_count,
            alias,
        } => serde_json::json!({
            "event": "compiled",
            "command": "deploy",
            "functions": compute_count,
            "routes": route_count,
            "alias": alias,
        }),

        DeployEvent::ProvisionAttempt {
            attempt,
            max_attempts,
        } => serde_json::json!({
            "event": "provision_attempt",
            "command": "deploy",
            "attempt": attempt,
            "max_attempts": max_attempts,
        }),

        DeployEvent::ProvisionRetry { attempt, error } => serde_json::json!({
            "event": "provision_retry",
            "command": "deploy",
            "attempt": attempt,
            "error": error,
        }),

        DeployEvent::Provisioned { assigned_domain } => serde_json::json!({
            "event": "provisioned",
            "command": "deploy",
            "assigned_domain": assigned_domain,
        }),

        DeployEvent::Warning { message } => serde_json::json!({
            "event": "warning",
            "command": "deploy",
            "message": message,
        }),

        DeployEvent::Completed {
            output_count,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "outputs": output_count,
            "dry_run": dry_run,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
