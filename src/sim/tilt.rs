//! Plate tilt state
//!
//! The plate's tilt is accumulated as a raw (x, y) vector in degrees and
//! re-derived into polar form once per tick. The accumulator itself is
//! clamped at the magnitude cap, so holding a direction against the limit
//! slides the vector along the cap circle instead of winding up hidden
//! overshoot.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Tilt vector in accumulator and polar form, all degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltState {
    /// Signed accumulator, unbounded until [`normalize`](Self::normalize)
    pub x_tilt: f32,
    pub y_tilt: f32,
    /// Derived magnitude, 0..=max_tilt after normalize
    pub magnitude: f32,
    /// Derived polar angle in [0, 360). Stale whenever the accumulator is
    /// exactly zero: a tilt that decays to nothing keeps pointing where it
    /// last pointed.
    pub direction: f32,
}

impl TiltState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw per-tick deltas to the accumulator. Axes are independent;
    /// combined inputs (e.g. up+left) land on both.
    pub fn apply_input(&mut self, dx: f32, dy: f32) {
        self.x_tilt += dx;
        self.y_tilt += dy;
    }

    /// Re-derive polar form from the accumulator, clamping at `max_tilt`.
    pub fn normalize(&mut self, max_tilt: f32) {
        let mut magnitude = self.x_tilt.hypot(self.y_tilt);

        if magnitude > 0.0 {
            if magnitude > max_tilt {
                let scale = max_tilt / magnitude;
                self.x_tilt *= scale;
                self.y_tilt *= scale;
                magnitude = max_tilt;
            }

            self.magnitude = magnitude;
            self.direction = normalize_degrees(self.y_tilt.atan2(self.x_tilt).to_degrees());
        }
        // magnitude 0: keep the previous magnitude and direction
    }

    /// Kick the plate to `start_tilt` degrees in a uniformly random whole-degree
    /// direction. Called once per plate when a round begins.
    pub fn apply_random_tilt(&mut self, rng: &mut Pcg32, start_tilt: f32) {
        let direction = rng.random_range(0..360) as f32;
        self.magnitude = start_tilt;
        self.direction = direction;

        let direction_rad = direction.to_radians();
        self.x_tilt = start_tilt * direction_rad.cos();
        self.y_tilt = start_tilt * direction_rad.sin();
    }

    /// Zero all four fields
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Direction shifted into the on-screen convention (0° = up)
    pub fn display_direction(&self) -> f32 {
        normalize_degrees(self.direction + 90.0)
    }
}
