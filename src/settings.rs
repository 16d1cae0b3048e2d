//! Runtime settings
//!
//! Persisted as a JSON file next to the binary. Balance values are nested
//! under `tuning` so a settings file can override only what it needs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{TARGET_ASSET, TARGET_NODE};
use crate::{GameError, Tuning};

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed (random when absent)
    pub seed: Option<u64>,

    // === View ===
    /// Viewport width in points
    pub viewport_width: f32,
    /// Viewport height in points
    pub viewport_height: f32,
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    // === Assets ===
    /// Scene asset holding the target model
    pub target_asset: String,
    /// Name of the node cloned for every target
    pub target_node: String,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            // iPhone-ish portrait view
            viewport_width: 390.0,
            viewport_height: 844.0,
            fov_degrees: 60.0,

            target_asset: TARGET_ASSET.to_string(),
            target_node: TARGET_NODE.to_string(),

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject a view the camera cannot project through, then check tuning
    pub fn validate(&self) -> Result<(), GameError> {
        for (name, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidSettings(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(GameError::InvalidSettings(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        self.tuning.validate()
    }

    /// Load settings from a file, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self, GameError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Seed to run with, drawing a fresh one if none is configured
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_overrides_nested_tuning() {
        let settings =
            Settings::from_json(r#"{"seed": 7, "tuning": {"initial_duration": 3.0}}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.initial_duration, 3.0);
        assert_eq!(settings.target_node, TARGET_NODE);
    }

    #[test]
    fn test_from_json_rejects_invalid_tuning() {
        let err = Settings::from_json(r#"{"tuning": {"speed_up": 2.0}}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_degenerate_view() {
        for json in [
            r#"{"viewport_width": 0.0}"#,
            r#"{"viewport_height": -844.0}"#,
            r#"{"fov_degrees": 0.0}"#,
            r#"{"fov_degrees": 180.0}"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, GameError::InvalidSettings(_)), "{}", json);
        }
        let nan_width = Settings {
            viewport_width: f32::NAN,
            ..Default::default()
        };
        assert!(nan_width.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, GameError::Settings(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("intercept-settings-does-not-exist.json");
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("intercept-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(42),
            fov_degrees: 75.0,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded.seed, Some(42));
        assert_eq!(loaded.fov_degrees, 75.0);
    }
}
