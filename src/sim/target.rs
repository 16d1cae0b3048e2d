//! Target entity and its motion toward the camera
//!
//! A target travels on a straight line from its spawn point to its
//! destination over `travel_duration` seconds. It leaves play exactly once,
//! either hit or on arrival, and `retire` is the only way out.

use glam::{Quat, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::heading::compute_spawn;
use crate::Tuning;

/// Why a target left play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retirement {
    /// Player tapped it in time
    Hit,
    /// Reached the camera unhit
    Arrived,
}

/// A single incoming ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub spawn_position: Vec3,
    pub orientation: Quat,
    /// Camera origin
    pub destination: Vec3,
    /// Seconds from spawn to arrival
    pub travel_duration: f32,
    /// Clock time of the spawn (seconds)
    pub spawn_time: f64,
    alive: bool,
}

impl Target {
    pub fn new(
        id: u32,
        spawn_position: Vec3,
        orientation: Quat,
        destination: Vec3,
        travel_duration: f32,
        spawn_time: f64,
    ) -> Self {
        Self {
            id,
            spawn_position,
            orientation,
            destination,
            travel_duration,
            spawn_time,
            alive: true,
        }
    }

    /// Spawn a target at a random point in front of `origin`, heading for it
    pub fn spawn<R: Rng>(
        rng: &mut R,
        id: u32,
        origin: Vec3,
        duration: f32,
        now: f64,
        tuning: &Tuning,
    ) -> Self {
        let spawn = compute_spawn(rng, origin, tuning.spawn_half_extent, tuning.spawn_depth);
        Self::new(id, spawn.position, spawn.orientation, origin, duration, now)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Clock time at which the target reaches its destination
    #[inline]
    pub fn arrival_time(&self) -> f64 {
        self.spawn_time + self.travel_duration as f64
    }

    /// Fraction of the trip covered at `now`, clamped to [0, 1]
    pub fn progress(&self, now: f64) -> f32 {
        if self.travel_duration <= 0.0 {
            return 1.0;
        }
        (((now - self.spawn_time) / self.travel_duration as f64) as f32).clamp(0.0, 1.0)
    }

    /// Linearly interpolated position at `now`
    pub fn position_at(&self, now: f64) -> Vec3 {
        self.spawn_position.lerp(self.destination, self.progress(now))
    }

    /// True once the trip is complete
    pub fn has_arrived(&self, now: f64) -> bool {
        now >= self.arrival_time()
    }

    /// Take the target out of play
    ///
    /// Returns true only for the first call; later calls are no-ops, so a hit
    /// and an arrival racing for the same target resolve to one outcome.
    pub fn retire(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}
