//! Error taxonomy
//!
//! Only startup and configuration can fail. Taps that hit nothing and
//! hit/arrival races are resolved by the simulation and never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("scene asset not found: {asset}")]
    AssetNotFound { asset: String },

    #[error("node '{node}' not found in scene asset {asset}")]
    NodeNotFound { asset: String, node: String },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
