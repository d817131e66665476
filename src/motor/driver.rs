//! Blinds motor driver.
//!
//! Owns the motor state and the hardware handle. Every operation takes
//! `&mut self`, so there is exactly one writer and no locking.

use crate::config::units::{Percent, Steps};
use crate::config::{ActuatorConfig, OperatorConfig};
use crate::hardware::HardwareIo;
use crate::motion::{
    self, BurstResult, Direction, MoveMode, MoveOutcome, MovePlan, MoveRequest, MoveState,
    Polarity, RampPhase, VelocityRamp,
};

use super::position::Position;
use super::state::MotorStatus;

/// Stepper motor driving a blind between home (0 %) and its limit (100 %).
///
/// Generic over the hardware capability, so the same controller runs on
/// embedded-hal pins ([`PinHardware`](crate::hardware::PinHardware)) or on
/// the [`SimulatedHardware`](crate::hardware::SimulatedHardware) double.
///
/// Two ways to move:
/// - [`move_sync`](Self::move_sync) blocks until the move is done.
/// - [`move_async`](Self::move_async) arms the move; the host loop then calls
///   [`service`](Self::service) every iteration, and each call steps at most
///   `burst_cap` times.
///
/// A pending background move has no timeout. If the host stops calling
/// `service()` the move simply stays incomplete.
pub struct BlindsMotor<HW: HardwareIo> {
    /// Pin and timing primitives.
    hw: HW,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Current absolute position and travel limit.
    position: Position,

    /// Last commanded direction.
    direction: Direction,

    /// Logical-to-physical direction mapping.
    polarity: Polarity,

    /// DIR level currently driven (cached to avoid unnecessary pin writes).
    dir_signal: Option<bool>,

    /// Speed ramp (owns the current half-pulse delay).
    ramp: VelocityRamp,

    /// Background move state.
    motion: MoveState,

    /// Max steps per `service()` call.
    burst_cap: u32,

    /// Jog and self test parameters.
    operator: OperatorConfig,
}

impl<HW: HardwareIo> BlindsMotor<HW> {
    /// Create a motor at position 0, idle, facing Forward.
    ///
    /// The configuration is taken as-is; run
    /// [`validate_config`](crate::config::validate_config) first if it comes
    /// from an untrusted source.
    pub fn new(hw: HW, config: &ActuatorConfig) -> Self {
        let mut motor = Self {
            hw,
            name: config.name.clone(),
            position: Position::new(config.travel.limit_steps),
            direction: Direction::Forward,
            polarity: Polarity::from_inverted(config.travel.invert_direction),
            dir_signal: None,
            ramp: VelocityRamp::from_config(&config.ramp),
            motion: MoveState::Idle,
            burst_cap: config.burst_cap.max(1),
            operator: config.operator.clone(),
        };
        motor.set_direction(Direction::Forward);
        motor
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get current position in steps.
    #[inline]
    pub fn position(&self) -> Steps {
        self.position.steps()
    }

    /// Get the travel limit in steps.
    #[inline]
    pub fn limit(&self) -> Steps {
        self.position.limit()
    }

    /// Steps left in the current background move (0 when idle).
    #[inline]
    pub fn pending_steps(&self) -> u32 {
        self.motion.pending_steps()
    }

    /// Check if no background move is pending.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.motion.is_idle()
    }

    /// Current half-pulse delay in microseconds.
    #[inline]
    pub fn speed(&self) -> u32 {
        self.ramp.speed()
    }

    /// Current ramp phase.
    #[inline]
    pub fn phase(&self) -> RampPhase {
        self.ramp.phase()
    }

    /// Last commanded direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current DIR polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Max steps a single `service()` call may take.
    #[inline]
    pub fn burst_cap(&self) -> u32 {
        self.burst_cap
    }

    /// Snapshot for diagnostics.
    pub fn status(&self) -> MotorStatus {
        MotorStatus {
            position: self.position.steps(),
            limit: self.position.limit(),
            percent: self.position.percent(),
            pending_steps: self.motion.pending_steps(),
            speed_us: self.ramp.speed(),
            direction: self.direction,
            polarity: self.polarity,
            phase: self.ramp.phase(),
        }
    }

    /// Borrow the hardware.
    #[inline]
    pub fn hardware(&self) -> &HW {
        &self.hw
    }

    /// Mutably borrow the hardware.
    #[inline]
    pub fn hardware_mut(&mut self) -> &mut HW {
        &mut self.hw
    }

    /// Give the hardware back.
    pub fn into_hardware(self) -> HW {
        self.hw
    }

    /// Command a direction and latch the DIR signal under the current polarity.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;

        let level = self.polarity.dir_signal(direction);
        if self.dir_signal != Some(level) {
            self.hw.set_direction_signal(level);
            self.dir_signal = Some(level);
        }
    }

    /// Whether the travel guard refuses the next step.
    #[inline]
    pub fn at_limit(&self) -> bool {
        motion::at_limit(self.position.steps(), self.direction, self.position.limit())
    }

    /// Emit one step pulse and account for it.
    ///
    /// Does not consult the travel guard and does not touch ENABLE; use
    /// [`run_burst`](Self::run_burst) for guarded stepping.
    pub fn single_step(&mut self) {
        let half_period = self.ramp.speed();

        self.hw.set_step_signal(true);
        self.hw.delay_microseconds(half_period);
        self.hw.set_step_signal(false);
        self.hw.delay_microseconds(half_period);

        self.position.advance(self.direction);
        let remaining = self.motion.step();
        self.ramp.adjust(remaining);

        self.hw.yield_now();
    }

    /// Take up to `count` steps in the current direction.
    ///
    /// The travel guard is checked before every step; the burst stops early
    /// with `limited` set as soon as it refuses one. ENABLE is asserted once
    /// before the first pulse and released once after the last. A burst that
    /// takes no step leaves every pin untouched.
    pub fn run_burst(&mut self, count: u32) -> BurstResult {
        let result = if count == 0 {
            BurstResult::default()
        } else if self.at_limit() {
            BurstResult {
                executed: 0,
                limited: true,
            }
        } else {
            self.energized_burst(count)
        };

        debug!(
            "burst: stepped {} of {}, position {}",
            result.executed,
            count,
            self.position.steps().0
        );
        result
    }

    /// Plan a move to `target` from the current position (no side effects).
    #[inline]
    pub fn plan(&self, target: impl Into<Percent>) -> MovePlan {
        motion::plan(self.position.steps(), self.position.limit(), target.into())
    }

    /// Move to `target` percent of travel, blocking until done.
    ///
    /// Replaces any pending background move. Blocks the caller for the whole
    /// move, so keep it for short moves or hosts with nothing else to do.
    pub fn move_sync(&mut self, target: impl Into<Percent>) -> BurstResult {
        let plan = self.plan(target);
        self.arm(plan);

        let result = self.run_burst(plan.steps);
        if result.limited {
            info!(
                "move stopped at travel limit, position {}",
                self.position.steps().0
            );
        }
        self.cancel();
        result
    }

    /// Arm a background move to `target` percent of travel.
    ///
    /// Nothing moves until [`service`](Self::service) is called. Replaces
    /// any pending background move.
    pub fn move_async(&mut self, target: impl Into<Percent>) -> MovePlan {
        let plan = self.plan(target);
        self.arm(plan);

        debug!(
            "armed move: {} steps toward {}",
            plan.steps,
            plan.target.0
        );
        plan
    }

    /// Advance a background move by one bounded burst.
    ///
    /// Call on every host loop iteration. Returns `None` when idle. A burst
    /// stopped by the travel guard ends the move.
    pub fn service(&mut self) -> Option<BurstResult> {
        if self.motion.is_idle() {
            return None;
        }

        let count = self.motion.pending_steps().min(self.burst_cap);
        let result = self.run_burst(count);
        if result.limited {
            info!(
                "background move stopped at travel limit, position {}",
                self.position.steps().0
            );
            self.cancel();
        }
        Some(result)
    }

    /// Drop any pending background move. Idempotent.
    pub fn cancel(&mut self) {
        self.motion = MoveState::Idle;
        self.ramp.begin();
    }

    /// Carry out a request from the control layer.
    pub fn request(&mut self, request: MoveRequest) -> MoveOutcome {
        match request.mode {
            MoveMode::Sync => MoveOutcome::Finished(self.move_sync(request.target_percent)),
            MoveMode::Async => MoveOutcome::Started(self.move_async(request.target_percent)),
        }
    }

    /// Swap the logical-to-physical direction mapping.
    ///
    /// Takes effect from the next commanded direction. Should not be called
    /// while a background move is pending.
    pub fn reverse_direction(&mut self) {
        self.warn_if_moving();
        self.polarity = self.polarity.toggled();
    }

    /// Declare the current physical position to be 0 (fully closed).
    ///
    /// Should not be called while a background move is pending.
    pub fn home(&mut self) {
        self.warn_if_moving();
        self.position.home();
    }

    /// Declare the current physical position to be the far end of travel.
    ///
    /// Should not be called while a background move is pending.
    pub fn set_limit(&mut self) {
        self.warn_if_moving();
        self.position.set_limit_here();
    }

    /// Nudge the blind by `jog_steps` in `direction`, blocking.
    ///
    /// Cancels any pending background move first. The travel guard applies.
    pub fn jog(&mut self, direction: Direction) -> BurstResult {
        self.cancel();
        self.set_direction(direction);
        self.run_burst(self.operator.jog_steps)
    }

    /// Power-on wiggle: forward and back by `self_test_steps`.
    ///
    /// Pauses `self_test_pause_ms` around the direction change and leaves the
    /// motor facing Forward. The travel guard applies to both legs.
    pub fn self_test(&mut self) -> BurstResult {
        self.cancel();
        let steps = self.operator.self_test_steps;
        let pause_us = self.operator.self_test_pause_ms.saturating_mul(1000);

        self.set_direction(Direction::Forward);
        let out = self.run_burst(steps);
        self.hw.delay_microseconds(pause_us);
        self.set_direction(Direction::Reverse);
        self.hw.delay_microseconds(pause_us);
        let back = self.run_burst(steps);
        self.set_direction(Direction::Forward);

        info!(
            "self test: {} out, {} back, position {}",
            out.executed,
            back.executed,
            self.position.steps().0
        );
        out.then(back)
    }

    fn arm(&mut self, plan: MovePlan) {
        let restart = self.motion.is_idle() || plan.direction != self.direction;

        self.set_direction(plan.direction);
        self.motion = MoveState::with_pending(plan.steps);
        if restart || self.motion.is_idle() {
            self.ramp.begin();
        }
    }

    fn energized_burst(&mut self, count: u32) -> BurstResult {
        let mut result = BurstResult::default();

        self.hw.assert_enable();
        while result.executed < count {
            if self.at_limit() {
                result.limited = true;
                break;
            }
            self.single_step();
            result.executed += 1;
        }
        self.hw.deassert_enable();

        result
    }

    fn warn_if_moving(&self) {
        if !self.motion.is_idle() {
            warn!(
                "calibration with {} steps pending",
                self.motion.pending_steps()
            );
        }
    }
}
