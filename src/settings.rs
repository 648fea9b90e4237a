//! Game settings
//!
//! Loaded from an optional JSON file; any field left out takes its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::locale::LanguageMode;
use crate::machine::GameMode;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode settings for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Ticks per second while playing
    pub play_tick_hz: u32,
    /// Ticks per second in menus and the help screen
    pub menu_tick_hz: u32,
    /// Frozen ticks after each goal (0 disables)
    pub goal_pause_ticks: u32,
    /// How long a key counts as held after its last press or repeat event.
    ///
    /// Terminals without release events send a press, then nothing until the
    /// OS repeat delay (typically 250 to 600 ms) elapses. The window must
    /// outlast that gap or a held paddle stutters.
    pub key_hold_ms: u64,
    /// Language shown at startup
    pub language: LanguageMode,
    /// Cap on vertical ball speed after paddle hits (None = uncapped)
    pub max_vertical_speed: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            play_tick_hz: PLAY_TICK_HZ,
            menu_tick_hz: MENU_TICK_HZ,
            goal_pause_ticks: GOAL_PAUSE_TICKS,
            key_hold_ms: KEY_HOLD_MS,
            language: LanguageMode::Both,
            max_vertical_speed: None,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.play_tick_hz == 0 {
            return Err(SettingsError::Invalid {
                field: "play_tick_hz",
                reason: "must be at least 1".into(),
            });
        }
        if self.menu_tick_hz == 0 {
            return Err(SettingsError::Invalid {
                field: "menu_tick_hz",
                reason: "must be at least 1".into(),
            });
        }
        if let Some(cap) = self.max_vertical_speed {
            if !(cap.is_finite() && cap > 0.0) {
                return Err(SettingsError::Invalid {
                    field: "max_vertical_speed",
                    reason: format!("must be a positive number, got {cap}"),
                });
            }
        }
        Ok(())
    }

    /// Fixed tick interval for `mode`
    pub fn tick_interval(&self, mode: GameMode) -> Duration {
        let hz = if mode.runs_at_play_rate() {
            self.play_tick_hz
        } else {
            self.menu_tick_hz
        };
        Duration::from_secs(1) / hz.max(1)
    }

    pub fn key_hold(&self) -> Duration {
        Duration::from_millis(self.key_hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.play_tick_hz, 60);
        assert_eq!(settings.menu_tick_hz, 30);
        assert!(settings.max_vertical_speed.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "seed": 7, "language": "native" }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.language, LanguageMode::Native);
        assert_eq!(settings.goal_pause_ticks, GOAL_PAUSE_TICKS);
    }

    #[test]
    fn test_tick_interval_per_mode() {
        let settings = Settings::default();
        assert_eq!(
            settings.tick_interval(GameMode::Playing),
            Duration::from_secs(1) / 60
        );
        assert_eq!(
            settings.tick_interval(GameMode::PausedMenu),
            Duration::from_secs(1) / 30
        );
    }

    #[test]
    fn test_rejects_zero_rate() {
        let settings = Settings {
            menu_tick_hz: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { field: "menu_tick_hz", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_cap() {
        let settings = Settings {
            max_vertical_speed: Some(-1.0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("marty-pong-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(99),
            max_vertical_speed: Some(12.0),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_key_hold_outlasts_repeat_delay() {
        assert!(Settings::default().key_hold() >= Duration::from_millis(500));
    }

    #[test]
    fn test_encode_error_message() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = SettingsError::Serialize {
            path: PathBuf::from("out.json"),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to encode settings for out.json"));
        assert!(!message.contains("malformed"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Settings::load(Path::new("/nonexistent/marty-pong.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
