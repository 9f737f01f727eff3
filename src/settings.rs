//! Runner settings and key bindings
//!
//! Read from an optional JSON file. Missing fields fall back to defaults, so a
//! file only needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_PERIOD;
use crate::platform::KeyBindings;

/// Where produced states go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Milestones through the logger
    #[default]
    Log,
    /// One JSON state per line on stdout
    Json,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Log => "log",
            OutputMode::Json => "json",
        }
    }
}

/// Failures while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,
    #[error("session of {ticks} ticks every {period} units overflows the clock")]
    SessionTooLong { ticks: usize, period: u64 },
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub key_bindings: KeyBindings,
    /// Time units between clock ticks
    pub tick_period: u64,
    /// Length of a headless session, in ticks
    pub session_ticks: usize,
    /// Seed for the scripted demo input
    pub input_seed: u64,
    pub output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_bindings: KeyBindings::default(),
            tick_period: TICK_PERIOD,
            session_ticks: 3_000,
            input_seed: 0x5eed,
            output: OutputMode::Log,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_period == 0 {
            return Err(SettingsError::ZeroTickPeriod);
        }
        if self.checked_session_length().is_none() {
            return Err(SettingsError::SessionTooLong {
                ticks: self.session_ticks,
                period: self.tick_period,
            });
        }
        Ok(())
    }

    fn checked_session_length(&self) -> Option<u64> {
        let ticks = u64::try_from(self.session_ticks).ok()?;
        self.tick_period.checked_mul(ticks)
    }

    /// Total simulated time covered by one headless session
    pub fn session_length(&self) -> u64 {
        self.checked_session_length().unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "session_ticks": 10, "output": "json" }"#)
            .expect("valid settings");
        assert_eq!(settings.session_ticks, 10);
        assert_eq!(settings.output, OutputMode::Json);
        assert_eq!(settings.tick_period, TICK_PERIOD);
        assert_eq!(settings.key_bindings, KeyBindings::default());
    }

    #[test]
    fn test_rebinding_from_json() {
        let settings = Settings::from_json(r#"{ "key_bindings": { "jump": { "Char": "j" } } }"#)
            .expect("valid settings");
        assert_eq!(settings.key_bindings.jump, Key::Char('j'));
        assert_eq!(settings.key_bindings.up, Key::ArrowUp);
    }

    #[test]
    fn test_zero_tick_period_rejected() {
        let err = Settings::from_json(r#"{ "tick_period": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::ZeroTickPeriod));
    }

    #[test]
    fn test_overflowing_session_rejected() {
        let json = format!(r#"{{ "tick_period": 10, "session_ticks": {} }}"#, u64::MAX / 2);
        let err = Settings::from_json(&json).unwrap_err();
        assert!(matches!(err, SettingsError::SessionTooLong { period: 10, .. }));
    }

    #[test]
    fn test_bad_json_rejected() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("riverhop-settings-that-does-not-exist.json");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io { .. })));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("riverhop-settings-{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.input_seed = 99;
        fs::write(&path, serde_json::to_string(&settings).expect("serialize")).expect("write");

        let loaded = Settings::load(&path).expect("load");
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_session_length() {
        let settings = Settings {
            tick_period: 10,
            session_ticks: 300,
            ..Settings::default()
        };
        assert_eq!(settings.session_length(), 3_000);
        assert_eq!(OutputMode::Json.as_str(), "json");
    }
}
