//! # blinds-motion
//!
//! Position control for a motorized window blind driven by a STEP/DIR/ENABLE
//! stepper driver, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Percent positioning**: Move to 0-100 % of a calibrated travel range
//! - **Travel guard**: No step is ever taken outside `[0, limit]`
//! - **Cooperative background moves**: Bounded bursts from the host loop
//! - **Linear velocity ramp**: Speeds up after start, slows down before stop
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blinds_motion::{BlindsMotor, Direction};
//!
//! let config = blinds_motion::load_config("blinds.toml")?;
//!
//! let mut motor = BlindsMotor::builder()
//!     .config(&config)
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .enable_pin(enable_pin)
//!     .delay(delay)
//!     .build()?;
//!
//! motor.self_test();
//! motor.move_async(50);
//! loop {
//!     motor.service();
//!     // handle network, buttons...
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Routes logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::result_large_err)]

// Must come first so the macros are visible in every module below.
#[macro_use]
mod logging;

pub mod config;
pub mod error;
pub mod hardware;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, ActuatorConfig, OperatorConfig, RampConfig, TravelConfig};
pub use error::{Error, Result};
pub use hardware::{HardwareIo, PinHardware, SimulatedHardware};
pub use motion::{
    BurstResult, Direction, MoveMode, MoveOutcome, MovePlan, MoveRequest, Polarity, RampPhase,
};
pub use motor::{BlindsMotor, BlindsMotorBuilder, MotorStatus, Position};

#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Percent, Steps};
