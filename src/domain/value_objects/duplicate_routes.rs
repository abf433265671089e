//! DuplicateRoutePolicy value object - what to do when two entries share a route name

use serde::{Deserialize, Serialize};

/// Handling of API entries whose basenames collide (`a/hello.ts`, `b/hello.js`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateRoutePolicy {
    /// Fail compilation with a configuration error
    #[default]
    Reject,
    /// The later entry replaces the earlier one (historical behavior)
    LastWins,
}
