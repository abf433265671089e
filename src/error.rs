//! Error types for ServerlessUI
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ProvisionError;

/// Result type alias for ServerlessUI operations
pub type ServerlessUiResult<T> = Result<T, ServerlessUiError>;

/// Errors raised by the pure compiler services.
///
/// Compilation is all-or-nothing: any of these means no plan was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Structurally invalid or contradictory input
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// An API entry path that cannot be turned into a route
    #[error("invalid entry '{path}': {reason}")]
    InvalidEntry { path: PathBuf, reason: String },
}

impl CompileError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_entry(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for ServerlessUI operations
#[derive(Error, Debug)]
pub enum ServerlessUiError {
    /// Compilation failed
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The provisioner rejected or failed the plan
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Transient provisioning failures persisted through every attempt
    #[error("provisioning failed after {attempts} attempt(s): {last}")]
    RetriesExhausted { attempts: u32, last: ProvisionError },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
