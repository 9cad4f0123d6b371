//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One state update per tick, driven by the caller's cadence
//! - Seeded RNG only (used solely for the random start tilt)
//! - No rendering or platform dependencies

pub mod ball;
pub mod difficulty;
pub mod round;
pub mod tilt;

pub use ball::{Ball, Containment};
pub use difficulty::{DifficultyCurve, EnvParams, StepSchedule};
pub use round::{Plate, Round, RoundPhase, TiltInput};
pub use tilt::TiltState;
