//! Tiltball entry point
//!
//! Headless demo driver: runs a round against a simple autopilot and prints
//! per-second telemetry plus a JSON summary when the round ends. Usage:
//!
//! ```text
//! tiltball [plates] [seed] [max-seconds]
//! ```
//!
//! A graphical front end would replace this loop wholesale; the simulation
//! only ever sees input snapshots and query reads.

use std::env;
use std::error::Error;

use serde::Serialize;

use tiltball::sim::{Plate, Round, RoundPhase, TiltInput};
use tiltball::tuning::Tuning;

/// Demo cadence; the shell owns the clock, not the simulation
const TICK_DT: f32 = 1.0 / 60.0;

/// How far ahead of the ball the autopilot aims, in ticks of travel
const LEAD_TICKS: f32 = 60.0;

#[derive(Debug, Serialize)]
struct PlateSummary {
    tilt_magnitude: f32,
    tilt_direction: f32,
    ball_speed: f32,
    distance_from_center: f32,
    distance_to_edge: f32,
}

#[derive(Debug, Serialize)]
struct RoundSummary {
    phase: RoundPhase,
    survival_seconds: f32,
    gravity: f32,
    rolling_resistance: f32,
    max_speed: f32,
    plates: Vec<PlateSummary>,
}

/// Steer the accumulator toward a tilt that pushes the ball back to center,
/// leading its velocity so the plate reacts before the ball builds up speed.
fn autopilot(plate: &Plate, tuning: &Tuning) -> TiltInput {
    let aim = plate.ball.pos + plate.ball.vel * LEAD_TICKS;
    let target_x = -aim.x / tuning.plate.plate_radius * tuning.tilt.max_tilt;
    let target_y = -aim.y / tuning.plate.plate_radius * tuning.tilt.max_tilt;

    // Hold still once within one tick of the target
    let dead = tuning.tilt.tilt_rate;
    TiltInput {
        left: plate.tilt.x_tilt > target_x + dead,
        right: plate.tilt.x_tilt < target_x - dead,
        up: plate.tilt.y_tilt > target_y + dead,
        down: plate.tilt.y_tilt < target_y - dead,
    }
}

fn summarize(round: &Round) -> RoundSummary {
    RoundSummary {
        phase: round.phase(),
        survival_seconds: round.elapsed(),
        gravity: round.env().gravity,
        rolling_resistance: round.env().rolling_resistance,
        max_speed: round.env().max_speed,
        plates: round
            .plates()
            .iter()
            .map(|plate| PlateSummary {
                tilt_magnitude: plate.tilt.magnitude,
                tilt_direction: plate.tilt.display_direction(),
                ball_speed: plate.ball.speed(),
                distance_from_center: plate.ball.distance_from_center(),
                distance_to_edge: plate.ball.distance_to_edge(&round.tuning().plate),
            })
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let plates: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0xBA11);
    let max_seconds: f32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(300.0);

    let mut round = Round::new(plates.clamp(1, 2), Tuning::default(), seed);
    round.start();

    let mut inputs = vec![TiltInput::default(); round.plate_count()];
    let mut next_report = 1.0f32;

    while round.phase() == RoundPhase::Running && round.elapsed() < max_seconds {
        for (input, plate) in inputs.iter_mut().zip(round.plates()) {
            *input = autopilot(plate, round.tuning());
        }
        round.tick(&inputs, TICK_DT);

        if round.elapsed() >= next_report {
            for (index, plate) in round.plates().iter().enumerate() {
                log::info!(
                    "t={:.0}s plate {}: tilt {:.1}° @ {:.0}°, speed {:.2}, edge {:.0}",
                    round.elapsed(),
                    index,
                    plate.tilt.magnitude,
                    plate.tilt.display_direction(),
                    plate.ball.speed(),
                    plate.ball.distance_to_edge(&round.tuning().plate),
                );
            }
            next_report += 1.0;
        }
    }

    let summary = summarize(&round);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
