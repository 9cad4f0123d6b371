//! Tiltball - a plate balancing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tilt, ball physics, difficulty, round state)
//! - `tuning`: Data-driven game balance
//!
//! The simulation is presentation-agnostic: a front end feeds it per-tick
//! input snapshots and reads its query surface back for display. The bundled
//! binary is a headless driver that does exactly that.

pub mod sim;
pub mod tuning;

pub use sim::{
    Ball, Containment, DifficultyCurve, EnvParams, Round, RoundPhase, TiltInput, TiltState,
};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// These are the canonical defaults; [`Tuning`] carries them into a round so
/// tests can substitute non-default schedules.
pub mod consts {
    /// Tilt magnitude cap (degrees)
    pub const MAX_TILT: f32 = 45.0;
    /// Tilt magnitude handed to each plate when a round starts (degrees)
    pub const TILT_BEGINNING: f32 = 5.0;
    /// Accumulator change per held direction key per tick (degrees)
    pub const TILT_RATE: f32 = 0.48;

    /// Plate dimensions (plate-space units)
    pub const PLATE_RADIUS: f32 = 1000.0;
    pub const BALL_RADIUS: f32 = 30.0;

    /// Below this tilt magnitude the anti-stall floor is inactive (degrees)
    pub const STALL_GATE: f32 = 0.5;
    /// Anti-stall minimum speed per degree of tilt
    pub const MIN_SPEED_FACTOR: f32 = 0.015;

    /// Rolling resistance schedule: eases off over time
    pub const INITIAL_ROLLING_RESISTANCE: f32 = 0.18;
    pub const MIN_ROLLING_RESISTANCE: f32 = 0.01;
    pub const RESISTANCE_CHANGE_START_TIME: f32 = 20.0;
    pub const RESISTANCE_CHANGE_INTERVAL: f32 = 6.0;
    pub const RESISTANCE_CHANGE_STEP: f32 = -0.01;

    /// Gravity schedule: ramps up over time
    pub const INITIAL_GRAVITY: f32 = 0.08;
    pub const MAX_GRAVITY: f32 = 0.16;
    pub const GRAVITY_CHANGE_START_TIME: f32 = 110.0;
    pub const GRAVITY_CHANGE_INTERVAL: f32 = 20.0;
    pub const GRAVITY_CHANGE_STEP: f32 = 0.01;

    /// Speed cap schedule: loosens over time
    pub const INITIAL_MAX_SPEED: f32 = 6.0;
    pub const ABSOLUTE_MAX_SPEED: f32 = 14.0;
    pub const SPEED_CHANGE_START_TIME: f32 = 230.0;
    pub const SPEED_CHANGE_INTERVAL: f32 = 20.0;
    pub const SPEED_CHANGE_STEP: f32 = 0.5;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle < 0.0 {
        angle += 360.0;
    }
    while angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta in radians)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_polar_round_trip() {
        let p = polar_to_cartesian(100.0, std::f32::consts::FRAC_PI_4);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 100.0).abs() < 0.001);
        assert!((theta - std::f32::consts::FRAC_PI_4).abs() < 0.001);
    }
}
