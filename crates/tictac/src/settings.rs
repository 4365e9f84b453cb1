//! Settings: pacing delays, theme file location and initial mute state.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Delays used to pace the match so each step is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct Timing {
    /// Delay before the computer's move is applied.
    #[serde(default = "default_computer_move_ms")]
    computer_move_ms: u64,

    /// Delay between a winning move and the result notice.
    #[serde(default = "default_win_notice_ms")]
    win_notice_ms: u64,

    /// Delay between a drawing move and the result notice.
    #[serde(default = "default_draw_notice_ms")]
    draw_notice_ms: u64,
}

fn default_computer_move_ms() -> u64 {
    500
}

fn default_win_notice_ms() -> u64 {
    1000
}

fn default_draw_notice_ms() -> u64 {
    1500
}

impl Timing {
    /// No delays at all; every scheduled action fires on the next advance.
    pub fn immediate() -> Self {
        Self {
            computer_move_ms: 0,
            win_notice_ms: 0,
            draw_notice_ms: 0,
        }
    }

    /// Delay before the computer's move.
    pub fn computer_move(&self) -> Duration {
        Duration::from_millis(self.computer_move_ms)
    }

    /// Delay before a win notice.
    pub fn win_notice(&self) -> Duration {
        Duration::from_millis(self.win_notice_ms)
    }

    /// Delay before a draw notice.
    pub fn draw_notice(&self) -> Duration {
        Duration::from_millis(self.draw_notice_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            computer_move_ms: default_computer_move_ms(),
            win_notice_ms: default_win_notice_ms(),
            draw_notice_ms: default_draw_notice_ms(),
        }
    }
}

/// Application settings, loaded from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Pacing delays.
    #[serde(default)]
    timing: Timing,

    /// File holding the persisted theme preference.
    #[serde(default = "default_theme_file")]
    theme_file: PathBuf,

    /// Start with sound cues muted.
    #[serde(default)]
    muted: bool,
}

fn default_theme_file() -> PathBuf {
    PathBuf::from("tictac_theme.toml")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            theme_file: default_theme_file(),
            muted: false,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pacing() {
        let timing = Timing::default();
        assert_eq!(timing.computer_move(), Duration::from_millis(500));
        assert_eq!(timing.win_notice(), Duration::from_millis(1000));
        assert_eq!(timing.draw_notice(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = toml::from_str("muted = true\n[timing]\nwin_notice_ms = 10\n").unwrap();
        assert!(*settings.muted());
        assert_eq!(settings.timing().win_notice(), Duration::from_millis(10));
        assert_eq!(settings.timing().computer_move(), Duration::from_millis(500));
        assert_eq!(settings.theme_file(), &PathBuf::from("tictac_theme.toml"));
    }

    #[test]
    fn test_setters() {
        let timing = Timing::default().with_computer_move_ms(0);
        assert_eq!(timing.computer_move(), Duration::ZERO);
        let settings = Settings::default().with_muted(true).with_timing(timing);
        assert!(*settings.muted());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::from_file("/definitely/not/here.toml").is_err());
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
