//! Host runner settings
//!
//! Read from the JSON file named by `UART_PONG_SETTINGS`. The game itself has
//! no configuration surface; these only pace and seed the native runner.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_SEED, FRAME_DELAY_TICKS, WIN_DWELL_TICKS};

/// Longest accepted sleep-clock tick (one second)
pub const MAX_TICK_MICROS: u64 = 1_000_000;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "UART_PONG_SETTINGS";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: &'static str,
    },
}

/// How the frame delay is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Sleep the thread for `tick_micros` per tick
    #[default]
    Sleep,
    /// Busy-wait `spins_per_tick` iterations per tick
    Spin,
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Serve RNG seed
    pub seed: u32,
    /// Clock ticks between frames
    pub frame_delay_ticks: u32,
    /// Clock ticks the win banner stays up
    pub win_dwell_ticks: u32,
    pub clock: ClockKind,
    /// Tick length for the sleep clock
    pub tick_micros: u64,
    /// Spin iterations per tick for the spin clock
    pub spins_per_tick: u32,
    /// Stop after this many frames (runs forever when unset)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            frame_delay_ticks: FRAME_DELAY_TICKS,
            win_dwell_ticks: WIN_DWELL_TICKS,
            clock: ClockKind::Sleep,
            tick_micros: 1000,
            spins_per_tick: 100,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Tick length for the sleep clock
    pub fn tick(&self) -> Duration {
        Duration::from_micros(self.tick_micros)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_delay_ticks == 0 {
            return Err(SettingsError::Invalid {
                field: "frame_delay_ticks",
                message: "must be at least 1",
            });
        }
        if self.clock == ClockKind::Sleep && self.tick_micros == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_micros",
                message: "must be at least 1 with the sleep clock",
            });
        }
        if self.tick_micros > MAX_TICK_MICROS {
            return Err(SettingsError::Invalid {
                field: "tick_micros",
                message: "must be at most 1000000",
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `UART_PONG_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", Path::new(&path).display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board_timing() {
        let settings = Settings::default();
        assert_eq!(settings.seed, 12345);
        assert_eq!(settings.frame_delay_ticks, 100);
        assert_eq!(settings.win_dwell_ticks, 5000);
        assert_eq!(settings.tick(), Duration::from_millis(1));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "clock": "spin" }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.clock, ClockKind::Spin);
        assert_eq!(settings.frame_delay_ticks, FRAME_DELAY_TICKS);
        assert_eq!(settings.max_frames, None);
    }

    #[test]
    fn test_rejects_zero_frame_delay() {
        let err = Settings::from_json(r#"{ "frame_delay_ticks": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "frame_delay_ticks",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_oversized_tick() {
        let err = Settings::from_json(r#"{ "tick_micros": 18446744073709551615 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "tick_micros",
                ..
            }
        ));
        assert!(Settings::from_json(r#"{ "tick_micros": 1000000 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from("/nonexistent/uart-pong.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
