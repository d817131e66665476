//! Example: Configuration-driven setup.
//!
//! This example demonstrates how to:
//! - Parse and validate an actuator configuration from TOML
//! - Run the power-on self test
//! - Calibrate travel with jog, home and set_limit
//!
//! Run with: `cargo run --example config_driven --features std`

use blinds_motion::{
    config::parse_config,
    error::{ConfigError, Error, Result},
    BlindsMotor, Direction, SimulatedHardware,
};

const CONFIG: &str = r#"
name = "living_room"
burst_cap = 1500

[travel]
limit_steps = 24000
invert_direction = false

[ramp]
start_speed_us = 600
end_speed_us = 450
decel_window_steps = 600
adjust_interval = 3

[operator]
jog_steps = 200
self_test_steps = 200
self_test_pause_ms = 1000
"#;

fn main() -> Result<()> {
    println!("=== Config-Driven Example ===\n");

    let config = parse_config(CONFIG)?;
    println!("Loaded '{}'", config.name);
    println!("  limit: {} steps", config.travel.limit_steps.value());
    println!(
        "  ramp: {} us -> {} us, decel window {} steps",
        config.ramp.start_speed_us.0, config.ramp.end_speed_us.0, config.ramp.decel_window_steps
    );

    let mut motor = BlindsMotor::new(SimulatedHardware::new(), &config);

    println!("\n=== Self Test ===");
    let result = motor.self_test();
    println!(
        "{} steps, back at {}, took {} ms",
        result.executed,
        motor.position().value(),
        motor.hardware().elapsed_us / 1000
    );

    println!("\n=== Calibration ===");
    for _ in 0..5 {
        motor.jog(Direction::Forward);
    }
    motor.set_limit();
    println!("limit set at {} steps", motor.limit().value());

    motor.move_sync(0);
    motor.home();
    let result = motor.move_sync(50);
    println!(
        "half open: {} steps, status {:?}",
        result.executed,
        motor.status()
    );

    println!("\n=== Rejected Configuration ===");
    match parse_config("[ramp]\nstart_speed_us = 300\nend_speed_us = 500\n") {
        Err(Error::Config(ConfigError::InvalidSpeedRange { start_us, end_us })) => {
            println!("rejected: start {} us < end {} us", start_us, end_us);
        }
        other => println!("unexpected: {:?}", other.map(|c| c.name)),
    }

    Ok(())
}
