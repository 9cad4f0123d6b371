//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`] and is handed to a round at
//! construction. Rounds never reach for globals, so tests can run against
//! non-default plates and schedules.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::DifficultyCurve;

/// Plate and ball geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateTuning {
    /// Plate radius in plate-space units
    pub plate_radius: f32,
    /// Ball radius in plate-space units
    pub ball_radius: f32,
}

impl PlateTuning {
    /// Maximum distance the ball's center may be from the plate center
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.plate_radius - self.ball_radius
    }
}

/// Tilt control parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltTuning {
    /// Tilt magnitude cap (degrees)
    pub max_tilt: f32,
    /// Magnitude applied when a round starts (degrees)
    pub start_tilt: f32,
    /// Accumulator change per held direction per tick (degrees)
    pub tilt_rate: f32,
    /// Tilt magnitude below which the anti-stall floor is inactive (degrees)
    pub stall_gate: f32,
    /// Anti-stall minimum speed per degree of tilt
    pub min_speed_factor: f32,
}

/// Complete balance configuration for a round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub plate: PlateTuning,
    pub tilt: TiltTuning,
    pub difficulty: DifficultyCurve,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            plate: PlateTuning {
                plate_radius: PLATE_RADIUS,
                ball_radius: BALL_RADIUS,
            },
            tilt: TiltTuning {
                max_tilt: MAX_TILT,
                start_tilt: TILT_BEGINNING,
                tilt_rate: TILT_RATE,
                stall_gate: STALL_GATE,
                min_speed_factor: MIN_SPEED_FACTOR,
            },
            difficulty: DifficultyCurve::default(),
        }
    }
}
