//! Player settings loaded from an optional TOML file.

use crate::session::Opponent;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::Scoring;
use tracing::{debug, info, instrument};

/// User-configurable settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Who plays O.
    #[serde(default)]
    opponent: Opponent,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// How the computer scores finished games.
    #[serde(default)]
    scoring: Scoring,
}

fn default_bot_delay_ms() -> u64 {
    300
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opponent: Opponent::default(),
            bot_delay_ms: default_bot_delay_ms(),
            scoring: Scoring::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given and present, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// The computer's reply delay.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// Replaces the opponent mode when `opponent` is set.
    pub fn override_opponent(mut self, opponent: Option<Opponent>) -> Self {
        if let Some(opponent) = opponent {
            self.opponent = opponent;
        }
        self
    }

    /// Replaces the reply delay when `bot_delay_ms` is set.
    pub fn override_bot_delay_ms(mut self, bot_delay_ms: Option<u64>) -> Self {
        if let Some(bot_delay_ms) = bot_delay_ms {
            self.bot_delay_ms = bot_delay_ms;
        }
        self
    }

    /// Replaces the scoring mode when `scoring` is set.
    pub fn override_scoring(mut self, scoring: Option<Scoring>) -> Self {
        if let Some(scoring) = scoring {
            self.scoring = scoring;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
