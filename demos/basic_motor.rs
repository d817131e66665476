//! Basic motor control example.
//!
//! Demonstrates wiring a blinds motor to embedded-hal pins with the builder
//! and running a few blocking moves.
//!
//! Run with: `cargo run --example basic_motor`

use blinds_motion::{config::units::Steps, BlindsMotor, Direction};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would busy-wait on a hardware timer
    }
}

/// Mock output pin that counts rising edges.
struct MockPin {
    state: bool,
    rising_edges: u32,
}

impl MockPin {
    fn new() -> Self {
        Self {
            state: false,
            rising_edges: 0,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            self.rising_edges += 1;
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

fn main() {
    println!("=== Basic Motor Control Example ===\n");

    let mut motor = BlindsMotor::builder()
        .name("demo_blind")
        .limit(Steps(4000))
        .step_pin(MockPin::new())
        .dir_pin(MockPin::new())
        .enable_pin(MockPin::new())
        .delay(MockDelay)
        .build()
        .expect("Failed to build motor");

    println!("Motor created: {}", motor.name());
    println!("Travel: 0..={} steps", motor.limit().value());

    for target in [50, 100, 120, 0, -10] {
        let result = motor.move_sync(target);
        println!(
            "move to {:>4}% -> {:>5} steps{}, now at {} steps",
            target,
            result.executed,
            if result.limited { " (stopped at limit)" } else { "" },
            motor.position().value()
        );
    }

    println!("\n=== Jog ===");
    let result = motor.jog(Direction::Forward);
    println!("jog forward: {} steps, position {}", result.executed, motor.position().value());
    let result = motor.jog(Direction::Reverse);
    println!("jog reverse: {} steps, position {}", result.executed, motor.position().value());

    let (step, _, _, _) = motor.into_hardware().release();
    println!("\nTotal STEP pulses: {}", step.rising_edges);
}
