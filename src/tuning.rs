//! Data-driven game balance
//!
//! Everything that shapes difficulty lives here so it can be tweaked from a
//! settings file without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;

/// Balance values for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Travel time of the first target (seconds)
    pub initial_duration: f32,
    /// Multiplier applied to the travel time after each hit
    pub speed_up: f32,
    /// Lower bound for the travel time (0 = unbounded ramp)
    pub min_duration: f32,
    /// Spawn x/y range, inclusive on both ends
    pub spawn_half_extent: i32,
    /// Spawn z relative to the camera
    pub spawn_depth: f32,
    /// Pick radius of a target node
    pub target_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_duration: INITIAL_DURATION,
            speed_up: SPEED_UP,
            min_duration: 0.0,
            spawn_half_extent: SPAWN_HALF_EXTENT,
            spawn_depth: SPAWN_DEPTH,
            target_radius: TARGET_RADIUS,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.initial_duration.is_finite() && self.initial_duration > 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "initial_duration must be positive, got {}",
                self.initial_duration
            )));
        }
        if !(self.speed_up > 0.0 && self.speed_up <= 1.0) {
            return Err(GameError::InvalidTuning(format!(
                "speed_up must be in (0, 1], got {}",
                self.speed_up
            )));
        }
        if !(self.min_duration >= 0.0 && self.min_duration <= self.initial_duration) {
            return Err(GameError::InvalidTuning(format!(
                "min_duration must be in [0, initial_duration], got {}",
                self.min_duration
            )));
        }
        if self.spawn_half_extent < 0 {
            return Err(GameError::InvalidTuning(format!(
                "spawn_half_extent must not be negative, got {}",
                self.spawn_half_extent
            )));
        }
        if !(self.spawn_depth.is_finite() && self.spawn_depth < 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "spawn_depth must be in front of the camera, got {}",
                self.spawn_depth
            )));
        }
        if !(self.target_radius > 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "target_radius must be positive, got {}",
                self.target_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            Tuning {
                initial_duration: 0.0,
                ..Default::default()
            },
            Tuning {
                speed_up: 1.5,
                ..Default::default()
            },
            Tuning {
                speed_up: 0.0,
                ..Default::default()
            },
            Tuning {
                min_duration: 10.0,
                ..Default::default()
            },
            Tuning {
                spawn_depth: 5.0,
                ..Default::default()
            },
            Tuning {
                spawn_half_extent: -1,
                ..Default::default()
            },
        ];
        for tuning in bad {
            assert!(tuning.validate().is_err(), "{:?} should be rejected", tuning);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"speed_up": 0.9}"#).unwrap();
        assert_eq!(tuning.speed_up, 0.9);
        assert_eq!(tuning.initial_duration, INITIAL_DURATION);
    }
}
