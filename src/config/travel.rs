//! Travel range configuration.

use serde::Deserialize;

use super::units::Steps;

/// Default travel limit in steps (a full drop on the reference blind).
pub const DEFAULT_LIMIT_STEPS: i64 = 24000;

/// Travel range and direction mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Upper end of travel in steps. The lower end is always 0.
    pub limit_steps: Steps,

    /// Start with the DIR signal inverted (swapped coil wiring or mounting side).
    pub invert_direction: bool,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            limit_steps: Steps(DEFAULT_LIMIT_STEPS),
            invert_direction: false,
        }
    }
}
