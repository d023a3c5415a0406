//! Match configuration.

use super::types::{GridSize, PlayerCount};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Setup choices for a match.
///
/// ```toml
/// grid_size = 8
/// player_count = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Side length of the grid (7, 8 or 9).
    #[serde(default)]
    grid_size: GridSize,

    /// Number of seated players (2 to 4).
    #[serde(default)]
    player_count: PlayerCount,
}

impl MatchConfig {
    /// Creates a configuration from validated parts.
    #[instrument]
    pub fn new(grid_size: GridSize, player_count: PlayerCount) -> Self {
        Self {
            grid_size,
            player_count,
        }
    }

    /// Replaces the grid size.
    pub fn set_grid_size(&mut self, grid_size: GridSize) {
        self.grid_size = grid_size;
    }

    /// Replaces the player count.
    pub fn set_player_count(&mut self, player_count: PlayerCount) {
        self.player_count = player_count;
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(grid = %config.grid_size, players = %config.player_count, "Config loaded");
        Ok(config)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
