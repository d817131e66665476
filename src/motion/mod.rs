//! Motion module for blinds-motion.
//!
//! Pure motion logic: velocity ramp, travel guard, position planner and the
//! move state machine. Nothing here touches hardware.

mod executor;
mod guard;
mod planner;
mod profile;

pub use executor::{BurstResult, MoveMode, MoveOutcome, MoveRequest, MoveState};
pub use guard::at_limit;
pub use planner::{plan, MovePlan};
pub use profile::{Direction, Polarity, RampPhase, VelocityRamp};
