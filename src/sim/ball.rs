//! Ball physics on a tilted plate
//!
//! One `step` per simulation tick: gravity resolved along the tilt into a
//! sliding acceleration, rolling resistance opposing any existing motion,
//! semi-implicit Euler integration, then the anti-stall floor and the speed
//! cap. One tick is one unit of simulation time; the frame cadence is the
//! clock.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::EnvParams;
use super::tilt::TiltState;
use crate::tuning::{PlateTuning, Tuning};

/// Outcome of a single physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Containment {
    /// Ball center is still within the plate's effective radius
    Contained,
    /// Ball center crossed the effective radius; the round is lost
    Escaped,
}

/// Ball state in plate-relative coordinates (origin at plate center)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Recomputed from scratch every step; readable between steps
    pub accel: Vec2,
}

impl Ball {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the plate center at rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one tick under the given tilt and environment
    pub fn step(&mut self, tilt: &TiltState, env: &EnvParams, tuning: &Tuning) -> Containment {
        let theta = tilt.magnitude.to_radians();
        let phi = tilt.direction.to_radians();

        // Gravity resolved along the plate surface, pointing down-slope
        let sliding_force = env.gravity * theta.sin();
        self.accel = Vec2::new(sliding_force * phi.cos(), sliding_force * phi.sin());

        // Rolling resistance opposes existing motion only; it cannot start
        // the ball moving from rest
        let normal_force = env.gravity * theta.cos();
        let speed = self.vel.length();
        if speed > 0.0 {
            let resistance_force = env.rolling_resistance * normal_force;
            self.accel -= (self.vel / speed) * resistance_force;
        }

        self.vel += self.accel;

        // Anti-stall floor: under a meaningful tilt the ball must keep
        // creeping, or resistance would pin it in place indefinitely
        if tilt.magnitude > tuning.tilt.stall_gate {
            let min_speed = tilt.magnitude * tuning.tilt.min_speed_factor;
            let new_speed = self.vel.length();
            if new_speed > 0.0 && new_speed < min_speed {
                self.vel *= min_speed / new_speed;
            }
        }

        let new_speed = self.vel.length();
        if new_speed > env.max_speed {
            self.vel *= env.max_speed / new_speed;
        }

        self.pos += self.vel;

        if self.pos.length() > tuning.plate.effective_radius() {
            Containment::Escaped
        } else {
            Containment::Contained
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn distance_from_center(&self) -> f32 {
        self.pos.length()
    }

    pub fn distance_to_edge(&self, plate: &PlateTuning) -> f32 {
        plate.plate_radius - self.distance_from_center() - plate.ball_radius
    }
}
