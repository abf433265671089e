//! Console Event Sink
//!
//! Human-readable progress lines on stderr. Per-attempt detail is only
//! shown at `-v` and above.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that writes progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: u8, unicode: bool) -> Self {
        Self::with_writer(io::stderr(), verbose, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: u8, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
            unicode,
        }
    }

    fn line(&self, event: &DeployEvent) -> Option<String> {
        let (arrow, warn) = if self.unicode {
            ("→", "⚠")
        } else {
            ("->", "[WARN]")
        };

        match event {
            DeployEvent::Started {
                stack_name,
                mode,
                production,
                provisioner,
            } => {
                let mut line = format!(
                    "{} Deploying {} ({}, {})",
                    arrow,
                    stack_name,
                    mode,
                    if *production { "production" } else { "preview" }
                );
                if self.verbose > 0 {
                    line.push_str(&format!(" via {}", provisioner));
                }
                Some(line)
            }
            DeployEvent::EntriesResolved { count } if self.verbose > 0 => {
                Some(format!("  {} api entr{}", count, if *count == 1 { "y" } else { "ies" }))
            }
            DeployEvent::Compiled {
                compute_count,
                route_count,
                alias,
            } if self.verbose > 0 => Some(format!(
                "  {} function(s), {} route(s){}",
                compute_count,
                route_count,
                alias
                    .as_ref()
                    .map(|a| format!(", alias {}", a))
                    .unwrap_or_default()
            )),
            DeployEvent::ProvisionAttempt {
                attempt,
                max_attempts,
            } if self.verbose > 1 => Some(format!(
                "  provisioning (attempt {}/{})",
                attempt, max_attempts
            )),
            DeployEvent::ProvisionRetry { attempt, error } => Some(format!(
                "{} attempt {} failed: {}; retrying",
                warn, attempt, error
            )),
            DeployEvent::Provisioned { assigned_domain } if self.verbose > 0 => {
                Some(format!("  assigned domain {}", assigned_domain))
            }
            DeployEvent::Warning { message } => Some(format!("{} {}", warn, message)),
            _ => None,
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = self.line(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", line);
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 1
    }
}
