//! Optional TOML configuration.
//!
//! Every section and field has a default, so a missing or partial file still
//! yields a usable config.

use crate::error::{AppError, Result};
use crate::models::{DEFAULT_PLAYER_NAME, Difficulty};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Name recorded when the player leaves the name prompt empty.
    #[serde(default = "default_player_name")]
    pub default_name: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_name: default_player_name(),
        }
    }
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tier highlighted when the menu opens.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
        }
    }
}

fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from("arcane_math.log")
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arcane-math")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
