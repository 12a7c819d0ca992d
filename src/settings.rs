//! Game tuning and preferences
//!
//! Loaded from a JSON file named by `STARGRAB_SETTINGS`. Missing keys fall back
//! to the defaults in [`crate::consts`], so a file can override just the values
//! it cares about.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::PlayerTuning;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("setting `{field}` is out of range: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub start_x: f32,
    pub start_y: f32,

    // === Ship ===
    /// Degrees turned per tick
    pub turn_step: f32,
    /// Speed gained per tick of thrust
    pub accel: f32,
    /// Velocity multiplier applied after each move (1.0 = no friction)
    pub friction: f32,
    /// Optional speed clamp after thrust (None = unbounded)
    pub max_speed: Option<f32>,
    pub collect_radius: f32,

    // === Stars ===
    pub max_stars: usize,
    pub spawn_roll_bound: u32,
    pub spawn_chance: u32,
    pub star_tint_min: u8,
    pub star_frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            start_x: START_X,
            start_y: START_Y,

            turn_step: TURN_STEP,
            accel: ACCEL,
            friction: 1.0,
            max_speed: None,
            collect_radius: COLLECT_RADIUS,

            max_stars: MAX_STARS,
            spawn_roll_bound: SPAWN_ROLL_BOUND,
            spawn_chance: SPAWN_CHANCE,
            star_tint_min: STAR_TINT_MIN,
            star_frame_ms: STAR_FRAME_MS,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_PATH: &'static str = "STARGRAB_SETTINGS";

    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file and validate them
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `STARGRAB_SETTINGS`, or defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Check every value against the range the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: format!("{value} must be a finite positive number"),
                })
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("turn_step", self.turn_step)?;
        positive("accel", self.accel)?;
        positive("collect_radius", self.collect_radius)?;

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(SettingsError::Invalid {
                field: "friction",
                reason: format!("{} must be in (0, 1]", self.friction),
            });
        }
        if let Some(max_speed) = self.max_speed {
            positive("max_speed", max_speed)?;
        }
        if self.max_stars > MAX_STARS {
            return Err(SettingsError::Invalid {
                field: "max_stars",
                reason: format!("{} exceeds the cap of {MAX_STARS}", self.max_stars),
            });
        }
        if self.spawn_roll_bound == 0 {
            return Err(SettingsError::Invalid {
                field: "spawn_roll_bound",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.spawn_chance > self.spawn_roll_bound {
            return Err(SettingsError::Invalid {
                field: "spawn_chance",
                reason: format!(
                    "{} exceeds spawn_roll_bound {}",
                    self.spawn_chance, self.spawn_roll_bound
                ),
            });
        }
        if self.star_frame_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "star_frame_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Ship handling derived from these settings
    pub fn player_tuning(&self) -> PlayerTuning {
        PlayerTuning {
            field_width: self.field_width,
            field_height: self.field_height,
            turn_step: self.turn_step,
            accel: self.accel,
            friction: self.friction,
            max_speed: self.max_speed,
            collect_radius: self.collect_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_stars, 5);
        assert_eq!(settings.max_speed, None);
        assert_eq!(settings.friction, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "max_stars": 3, "friction": 0.5 }"#).unwrap();
        assert_eq!(settings.max_stars, 3);
        assert_eq!(settings.friction, 0.5);
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.collect_radius, COLLECT_RADIUS);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let cases = [
            r#"{ "field_width": 0.0 }"#,
            r#"{ "collect_radius": -1.0 }"#,
            r#"{ "friction": 1.5 }"#,
            r#"{ "max_speed": 0.0 }"#,
            r#"{ "max_stars": 50 }"#,
            r#"{ "spawn_roll_bound": 0 }"#,
            r#"{ "spawn_chance": 101 }"#,
            r#"{ "star_frame_ms": 0 }"#,
        ];
        for json in cases {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid { .. }), "{json}");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/nonexistent/stargrab/settings.json").unwrap_err();
        match err {
            SettingsError::Io { path, .. } => {
                assert!(path.ends_with("settings.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_player_tuning_mirrors_settings() {
        let settings = Settings {
            turn_step: 3.0,
            max_speed: Some(12.0),
            ..Default::default()
        };
        let tuning = settings.player_tuning();
        assert_eq!(tuning.turn_step, 3.0);
        assert_eq!(tuning.max_speed, Some(12.0));
        assert_eq!(tuning.field_height, FIELD_HEIGHT);
    }
}
