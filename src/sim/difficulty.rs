//! Time-gated difficulty schedules
//!
//! Survival time drives three independent step schedules: rolling resistance
//! eases off, gravity ramps up, and the speed cap loosens. Each is a pure
//! function of elapsed time, so the environment can be recomputed from
//! scratch every tick with no hidden state.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment parameters for one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvParams {
    pub gravity: f32,
    pub rolling_resistance: f32,
    pub max_speed: f32,
}

/// A stepwise value change over elapsed time
///
/// Before `start_time` the value is `initial`. Afterward it moves by `step`
/// once per full `interval`, saturating at `limit`. A negative `step` makes
/// the schedule descend toward `limit` instead of climb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSchedule {
    pub initial: f32,
    pub step: f32,
    pub limit: f32,
    pub start_time: f32,
    pub interval: f32,
}

impl StepSchedule {
    pub fn value_at(&self, elapsed: f32) -> f32 {
        if elapsed < self.start_time {
            return self.initial;
        }
        let changes = ((elapsed - self.start_time) / self.interval).floor();
        let value = self.initial + changes * self.step;
        if self.step < 0.0 {
            value.max(self.limit)
        } else {
            value.min(self.limit)
        }
    }
}

/// The three schedules evaluated each tick from shared elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    pub resistance: StepSchedule,
    pub gravity: StepSchedule,
    pub max_speed: StepSchedule,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            resistance: StepSchedule {
                initial: INITIAL_ROLLING_RESISTANCE,
                step: RESISTANCE_CHANGE_STEP,
                limit: MIN_ROLLING_RESISTANCE,
                start_time: RESISTANCE_CHANGE_START_TIME,
                interval: RESISTANCE_CHANGE_INTERVAL,
            },
            gravity: StepSchedule {
                initial: INITIAL_GRAVITY,
                step: GRAVITY_CHANGE_STEP,
                limit: MAX_GRAVITY,
                start_time: GRAVITY_CHANGE_START_TIME,
                interval: GRAVITY_CHANGE_INTERVAL,
            },
            max_speed: StepSchedule {
                initial: INITIAL_MAX_SPEED,
                step: SPEED_CHANGE_STEP,
                limit: ABSOLUTE_MAX_SPEED,
                start_time: SPEED_CHANGE_START_TIME,
                interval: SPEED_CHANGE_INTERVAL,
            },
        }
    }
}

impl DifficultyCurve {
    pub fn evaluate(&self, elapsed: f32) -> EnvParams {
        EnvParams {
            gravity: self.gravity.value_at(elapsed),
            rolling_resistance: self.resistance.value_at(elapsed),
            max_speed: self.max_speed.value_at(elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_environment() {
        let curve = DifficultyCurve::default();
        let env = curve.evaluate(0.0);
        assert_eq!(env.gravity, 0.08);
        assert_eq!(env.rolling_resistance, 0.18);
        assert_eq!(env.max_speed, 6.0);
    }

    #[test]
    fn test_resistance_first_step() {
        let curve = DifficultyCurve::default();
        // (26 - 20) / 6 = 1 full interval elapsed
        let env = curve.evaluate(26.0);
        assert!((env.rolling_resistance - 0.17).abs() < 1e-6);
    }

    #[test]
    fn test_max_speed_boundary() {
        let curve = DifficultyCurve::default();
        // At the exact start time zero intervals have elapsed
        assert_eq!(curve.evaluate(230.0).max_speed, 6.0);
        assert_eq!(curve.evaluate(250.0).max_speed, 6.5);
    }

    #[test]
    fn test_schedules_saturate() {
        let curve = DifficultyCurve::default();
        let env = curve.evaluate(100_000.0);
        assert_eq!(env.rolling_resistance, 0.01);
        assert_eq!(env.gravity, 0.16);
        assert_eq!(env.max_speed, 14.0);
    }

    #[test]
    fn test_inactive_before_start() {
        let curve = DifficultyCurve::default();
        let env = curve.evaluate(19.9);
        assert_eq!(env.rolling_resistance, 0.18);
        assert_eq!(env.gravity, 0.08);
        assert_eq!(env.max_speed, 6.0);
    }

    proptest! {
        #[test]
        fn prop_monotonic(t1 in 0.0f32..2000.0, t2 in 0.0f32..2000.0) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let curve = DifficultyCurve::default();
            let a = curve.evaluate(lo);
            let b = curve.evaluate(hi);
            prop_assert!(b.rolling_resistance <= a.rolling_resistance);
            prop_assert!(b.gravity >= a.gravity);
            prop_assert!(b.max_speed >= a.max_speed);
        }

        #[test]
        fn prop_bounded(t in 0.0f32..1_000_000.0) {
            let curve = DifficultyCurve::default();
            let env = curve.evaluate(t);
            prop_assert!(env.rolling_resistance >= 0.01 && env.rolling_resistance <= 0.18);
            prop_assert!(env.gravity >= 0.08 && env.gravity <= 0.16);
            prop_assert!(env.max_speed >= 6.0 && env.max_speed <= 14.0);
        }
    }
}
