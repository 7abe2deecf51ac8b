//! Demo settings
//!
//! Window configuration for each demo plus the Pong tuning knobs. Everything
//! has a default matching the shipped demos; a JSON file can override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Environment variable naming an optional settings JSON file
pub const SETTINGS_ENV_VAR: &str = "ARCADE_DEMOS_SETTINGS";

/// Errors from loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// The settings JSON was malformed
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values parsed but make no sense together
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Static window configuration handed to the host framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    /// Window size in points
    pub point_width: u32,
    pub point_height: u32,
    /// Window position in points
    pub point_x: i32,
    pub point_y: i32,
    /// Clear colour as `0xRRGGBBAA`
    pub clear_color: u32,
}

impl WindowSettings {
    fn new(title: &str, point_height: u32, clear_color: u32) -> Self {
        Self {
            title: title.to_string(),
            point_width: 640,
            point_height,
            point_x: 10,
            point_y: 100,
            clear_color,
        }
    }

    pub fn pong() -> Self {
        Self::new("Pong", 360, 0x000032ff)
    }

    pub fn pong_classic() -> Self {
        Self::new("Pong", 360, 0x000032ff)
    }

    pub fn raycast() -> Self {
        Self::new("DDA RayCast Demo", 352, 0x000000ff)
    }

    pub fn template() -> Self {
        Self::new("Template", 360, 0x000000ff)
    }
}

/// Pong gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongTuning {
    /// Simulated screen size in world units (origin at the centre)
    pub screen_width: f32,
    pub screen_height: f32,
    /// Gap between a screen edge and its paddle's centre
    pub paddle_padding: f32,
    pub paddle_speed: f32,
    pub ball_speed: f32,
    /// Vertical velocity added for an edge hit (scaled by hit offset)
    pub spin_factor: f32,
    /// Points that end a versus match
    pub win_score: u32,
    pub enemy_speed: f32,
    /// Largest random aim error of the AI, in degrees
    pub ai_max_angle_deg: f32,
    /// Range of the AI's per-frame dead zone half-width
    pub ai_dead_zone_min: f32,
    pub ai_dead_zone_max: f32,
    /// Seed for the AI's random source
    pub seed: u64,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle_padding: PADDLE_PADDING,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            spin_factor: 0.75,
            win_score: WIN_SCORE,
            enemy_speed: 80.0,
            ai_max_angle_deg: 15.0,
            ai_dead_zone_min: 2.0,
            ai_dead_zone_max: 8.0,
            seed: 0x5eed,
        }
    }
}

impl PongTuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(SettingsError::Invalid {
                field: "screen_width/screen_height",
                reason: "must be positive",
            });
        }
        if self.win_score == 0 {
            return Err(SettingsError::Invalid {
                field: "win_score",
                reason: "must be at least 1",
            });
        }
        if self.ai_dead_zone_min < 0.0 || self.ai_dead_zone_min > self.ai_dead_zone_max {
            return Err(SettingsError::Invalid {
                field: "ai_dead_zone_min",
                reason: "must be non-negative and not above ai_dead_zone_max",
            });
        }
        if !(0.0..90.0).contains(&self.ai_max_angle_deg) {
            return Err(SettingsError::Invalid {
                field: "ai_max_angle_deg",
                reason: "must be in [0, 90)",
            });
        }
        Ok(())
    }
}

/// Sound settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// All settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pong: WindowSettings,
    pub pong_classic: WindowSettings,
    pub raycast: WindowSettings,
    pub template: WindowSettings,
    pub tuning: PongTuning,
    pub audio: AudioSettings,
    /// Log frames per second once a second
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pong: WindowSettings::pong(),
            pong_classic: WindowSettings::pong_classic(),
            raycast: WindowSettings::raycast(),
            template: WindowSettings::template(),
            tuning: PongTuning::default(),
            audio: AudioSettings::default(),
            show_fps: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`SETTINGS_ENV_VAR`], falling back to
    /// defaults if it is unset or unusable
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_windows() {
        let s = Settings::default();
        assert_eq!(s.raycast.title, "DDA RayCast Demo");
        assert_eq!(s.raycast.point_height, 352);
        assert_eq!(s.pong.clear_color, 0x000032ff);
        assert_eq!(s.tuning.win_score, 5);
        assert!(s.tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "tuning": { "win_score": 3 }, "show_fps": false }"#)
            .unwrap();
        assert_eq!(s.tuning.win_score, 3);
        assert_eq!(s.tuning.screen_width, SCREEN_WIDTH);
        assert!(!s.show_fps);
        assert_eq!(s.template, WindowSettings::template());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = Settings::default();
        s.tuning.seed = 42;
        s.audio.muted = true;
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "win_score": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "win_score", .. }));

        let err = Settings::from_json(
            r#"{ "tuning": { "ai_dead_zone_min": 9.0, "ai_dead_zone_max": 1.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
