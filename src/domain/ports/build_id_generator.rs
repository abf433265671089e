//! Build Id Generator Port
//!
//! Preview builds need a fresh id per invocation. Generation is injected so
//! the compiler stays deterministic and tests can pin the id.

use crate::domain::value_objects::BuildId;

/// Source of preview build ids
pub trait BuildIdGenerator: Send + Sync {
    fn generate(&self) -> BuildId;
}

/// Always returns the same id
#[derive(Debug, Clone)]
pub struct FixedBuildIdGenerator(pub BuildId);

impl BuildIdGenerator for FixedBuildIdGenerator {
    fn generate(&self) -> BuildId {
        self.0.clone()
    }
}
