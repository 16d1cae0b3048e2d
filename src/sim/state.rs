//! Game state and core simulation types
//!
//! `GameState` is the small value the difficulty engine threads through;
//! `Session` owns it together with the single live target and the RNG.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::target::{Retirement, Target};
use crate::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A target is in flight
    Playing,
    /// A target got through, waiting for restart
    GameOver,
}

/// Score, pace and phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// Travel time given to the next target (seconds)
    pub current_duration: f32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            current_duration: tuning.initial_duration,
            phase: GamePhase::Playing,
        }
    }
}

/// Everything the transition function reads and writes
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub state: GameState,
    pub tuning: Tuning,
    /// Camera position targets fly toward
    pub origin: Vec3,
    /// The one live target, if any
    target: Option<Target>,
    rng: Pcg32,
    next_id: u32,
}

impl Session {
    /// Create a session in the opening state; no target is spawned yet
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            state: GameState::new(&tuning),
            tuning,
            origin: Vec3::ZERO,
            target: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// The live target, if one is in flight
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref().filter(|t| t.is_alive())
    }

    /// Spawn the next target with the current duration
    ///
    /// Callers must have retired the previous target first.
    pub(crate) fn spawn_target(&mut self, now: f64) -> &Target {
        debug_assert!(self.target().is_none(), "spawned over a live target");
        let id = self.next_id;
        self.next_id += 1;
        let target = Target::spawn(
            &mut self.rng,
            id,
            self.origin,
            self.state.current_duration,
            now,
            &self.tuning,
        );
        log::debug!(
            "Target {} spawned at {} ({:.3}s to arrival)",
            target.id,
            target.spawn_position,
            target.travel_duration
        );
        self.target.insert(target)
    }

    /// Retire the live target if it has the given id
    ///
    /// Returns the retired target on success; stale ids and targets already
    /// retired return None.
    pub(crate) fn retire_target(&mut self, id: u32, cause: Retirement) -> Option<Target> {
        let target = self.target.as_mut().filter(|t| t.id == id)?;
        if !target.retire() {
            return None;
        }
        log::debug!("Target {} retired ({:?})", id, cause);
        self.target.take()
    }
}
