//! Round state machine
//!
//! A `Round` owns 1..N independent plate/ball pairs sharing one lifecycle,
//! one survival clock and one environment snapshot. Commands arriving in the
//! wrong phase are silent no-ops, never errors; the only terminal event is a
//! ball escaping its plate.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Containment};
use super::difficulty::EnvParams;
use super::tilt::TiltState;
use crate::tuning::Tuning;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the start command
    NotStarted,
    /// Live: clock accumulates, physics steps
    Running,
    /// Frozen mid-round, resumable
    Paused,
    /// A ball left its plate; terminal until reset
    Over,
}

/// Held directional controls for one plate, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiltInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TiltInput {
    /// Per-tick accumulator deltas. Screen convention: up is -y.
    fn deltas(&self, rate: f32) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up {
            dy -= rate;
        }
        if self.down {
            dy += rate;
        }
        if self.left {
            dx -= rate;
        }
        if self.right {
            dx += rate;
        }
        (dx, dy)
    }
}

/// One tilt surface with the ball riding on it
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub tilt: TiltState,
    pub ball: Ball,
}

/// A complete game: plates, shared clock, difficulty and phase
#[derive(Debug, Clone)]
pub struct Round {
    tuning: Tuning,
    rng: Pcg32,
    phase: RoundPhase,
    elapsed: f32,
    env: EnvParams,
    plates: Vec<Plate>,
}

impl Round {
    /// Create a round with `plate_count` zeroed plates.
    ///
    /// The seed fixes the random start tilts, making whole runs
    /// reproducible. Panics if `plate_count` is zero.
    pub fn new(plate_count: usize, tuning: Tuning, seed: u64) -> Self {
        assert!(plate_count >= 1, "a round needs at least one plate");
        Self {
            env: tuning.difficulty.evaluate(0.0),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundPhase::NotStarted,
            elapsed: 0.0,
            plates: vec![Plate::default(); plate_count],
        }
    }

    /// Classic one-plate game
    pub fn single(seed: u64) -> Self {
        Self::new(1, Tuning::default(), seed)
    }

    /// Two plates, one per hand
    pub fn dual(seed: u64) -> Self {
        Self::new(2, Tuning::default(), seed)
    }

    /// NotStarted -> Running; every plate gets its random start tilt.
    pub fn start(&mut self) {
        if self.phase != RoundPhase::NotStarted {
            return;
        }
        self.phase = RoundPhase::Running;
        for plate in &mut self.plates {
            plate
                .tilt
                .apply_random_tilt(&mut self.rng, self.tuning.tilt.start_tilt);
        }
        log::info!("round started with {} plate(s)", self.plates.len());
    }

    /// Running <-> Paused; no-op in any other phase.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            RoundPhase::Running => {
                log::info!("paused at {:.1}s", self.elapsed);
                RoundPhase::Paused
            }
            RoundPhase::Paused => {
                log::info!("resumed at {:.1}s", self.elapsed);
                RoundPhase::Running
            }
            other => other,
        };
    }

    /// Advance one simulation tick. Only the Running phase ticks.
    ///
    /// `dt` is the measured frame delta in seconds and feeds the difficulty
    /// clock only; the integrator runs on one unit of time per tick, so the
    /// frame cadence is the physics clock. `inputs` is indexed by plate;
    /// missing entries read as nothing held.
    pub fn tick(&mut self, inputs: &[TiltInput], dt: f32) {
        if self.phase != RoundPhase::Running {
            return;
        }

        self.elapsed += dt;
        self.env = self.tuning.difficulty.evaluate(self.elapsed);

        // Every plate steps before the phase check so a frame in which both
        // balls escape leaves both at their final positions.
        let mut any_escaped = false;
        for (index, plate) in self.plates.iter_mut().enumerate() {
            let input = inputs.get(index).copied().unwrap_or_default();
            let (dx, dy) = input.deltas(self.tuning.tilt.tilt_rate);
            plate.tilt.apply_input(dx, dy);
            plate.tilt.normalize(self.tuning.tilt.max_tilt);

            if plate.ball.step(&plate.tilt, &self.env, &self.tuning) == Containment::Escaped {
                log::info!("ball escaped plate {} after {:.1}s", index, self.elapsed);
                any_escaped = true;
            }
        }

        if any_escaped {
            self.phase = RoundPhase::Over;
        }
    }

    /// Over -> NotStarted with everything zeroed. The RNG stream continues,
    /// so consecutive rounds in one session draw different start tilts.
    pub fn reset(&mut self) {
        if self.phase != RoundPhase::Over {
            return;
        }
        for plate in &mut self.plates {
            plate.tilt.reset();
            plate.ball.reset();
        }
        self.phase = RoundPhase::NotStarted;
        self.elapsed = 0.0;
        self.env = self.tuning.difficulty.evaluate(0.0);
        log::info!("round reset");
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Survival time in seconds; accumulates only while Running
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Environment snapshot from the latest tick
    pub fn env(&self) -> &EnvParams {
        &self.env
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn plate_count(&self) -> usize {
        self.plates.len()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
