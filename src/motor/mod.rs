//! Motor module for blinds-motion.
//!
//! Provides the blinds motor controller, its position tracker and the
//! builder that wires it to embedded-hal pins.

mod builder;
mod driver;
mod position;
mod state;

pub use builder::BlindsMotorBuilder;
pub use driver::BlindsMotor;
pub use position::Position;
pub use state::MotorStatus;
