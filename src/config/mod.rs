//! Configuration module for blinds-motion.
//!
//! Provides types for loading and validating the actuator configuration
//! from TOML files (with `std` feature) or building it in code.

mod actuator;
mod ramp;
mod travel;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use actuator::{ActuatorConfig, OperatorConfig, DEFAULT_BURST_CAP};
pub use ramp::{
    RampConfig, DEFAULT_ADJUST_INTERVAL, DEFAULT_DECEL_WINDOW_STEPS, DEFAULT_END_SPEED_US,
    DEFAULT_START_SPEED_US,
};
pub use travel::{TravelConfig, DEFAULT_LIMIT_STEPS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Percent, Steps};
