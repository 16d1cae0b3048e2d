//! Intercept - tap the incoming ship before it reaches the camera
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, scoring, game phases)
//! - `renderer`: Renderer contract plus an in-memory headless backend
//! - `hit`: Tap hit testing against the renderer's picking
//! - `ui`: HUD text and restart control contract
//! - `game`: Binds the simulation to a renderer and HUD
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod hit;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::GameError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed frame timestep for the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Travel time of the first target of a round (seconds)
    pub const INITIAL_DURATION: f32 = 5.0;
    /// Duration multiplier applied after every hit (5% faster)
    pub const SPEED_UP: f32 = 0.95;

    /// Spawn x/y are drawn from [-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT]
    pub const SPAWN_HALF_EXTENT: i32 = 25;
    /// Spawn z, far in front of the camera
    pub const SPAWN_DEPTH: f32 = -105.0;

    /// Pick radius of the ship model
    pub const TARGET_RADIUS: f32 = 2.0;

    /// Scene asset holding the ship and the node name to clone from it
    pub const TARGET_ASSET: &str = "art.scnassets/ship.scn";
    pub const TARGET_NODE: &str = "ship";
}
