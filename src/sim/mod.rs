//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clock time passed in, never read
//! - Seeded RNG only
//! - One request applied at a time
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod heading;
pub mod state;
pub mod target;
pub mod tick;

pub use heading::{Spawn, compute_spawn, look_at};
pub use state::{GamePhase, GameState, Session};
pub use target::{Retirement, Target};
pub use tick::{Request, SimEvent, step};
