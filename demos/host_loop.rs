//! Example: Cooperative host loop.
//!
//! Background moves advance one bounded burst per loop iteration, leaving
//! the rest of the iteration for other work (network, buttons).
//!
//! Run with: `cargo run --example host_loop`

use blinds_motion::{
    ActuatorConfig, BlindsMotor, MoveOutcome, MoveRequest, SimulatedHardware,
};

fn main() {
    println!("=== Host Loop Example ===\n");

    let mut motor = BlindsMotor::new(SimulatedHardware::new(), &ActuatorConfig::default());

    // Commands arriving from the control layer, keyed by loop iteration.
    let commands = [
        (0, MoveRequest::background(100)),
        (5, MoveRequest::background(20)),
        (14, MoveRequest::sync(35)),
        (15, MoveRequest::background(0)),
    ];

    for iteration in 0..30 {
        for (at, request) in commands.iter() {
            if *at == iteration {
                match motor.request(*request) {
                    MoveOutcome::Started(plan) => println!(
                        "[{:>2}] started {:?} move of {} steps",
                        iteration, plan.direction, plan.steps
                    ),
                    MoveOutcome::Finished(result) => println!(
                        "[{:>2}] finished blocking move of {} steps",
                        iteration, result.executed
                    ),
                }
            }
        }

        if let Some(result) = motor.service() {
            let status = motor.status();
            println!(
                "[{:>2}] burst {:>4} steps -> {:>5} ({}%), {} pending, {} us",
                iteration,
                result.executed,
                status.position.value(),
                status.percent.value(),
                status.pending_steps,
                status.speed_us
            );
        }

        // other host work would run here
    }

    let hw = motor.hardware();
    println!(
        "\n{} pulses in {} bursts, {:.1} s of motor time",
        hw.pulses,
        hw.enable_asserts,
        hw.elapsed_us as f64 / 1_000_000.0
    );
}
