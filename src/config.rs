//! Runtime configuration, loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) is a valid config:
//!
//! ```toml
//! [save]
//! dir = ".hoops-idle"
//! debounce_ms = 1000
//!
//! [session]
//! max_catch_up_secs = 60
//! rng_seed = 42
//!
//! [challenges]
//! daily = 3
//! weekly = 3
//!
//! [logging]
//! filter = "hoops_idle=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::game::challenges::Rotation;
use crate::game::save::STORAGE_KEY;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub save: SaveConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub challenges: ChallengeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Where and how often the game is saved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveConfig {
    /// Directory for file-backed saves.
    #[serde(default = "default_save_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub key: String,

    /// Quiet period after the last state change before saving.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            dir: default_save_dir(),
            key: default_storage_key(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Longest gap between two clock updates that is still simulated.
    #[serde(default = "default_max_catch_up_secs")]
    pub max_catch_up_secs: u64,

    /// Fixed seed for trivia selection. Taken from the wall clock when unset.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_catch_up_secs: default_max_catch_up_secs(),
            rng_seed: None,
        }
    }
}

/// Number of challenges active at once per period.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChallengeConfig {
    #[serde(default = "default_active_challenges")]
    pub daily: usize,
    #[serde(default = "default_active_challenges")]
    pub weekly: usize,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            daily: default_active_challenges(),
            weekly: default_active_challenges(),
        }
    }
}

impl ChallengeConfig {
    pub fn rotation(&self) -> Rotation {
        Rotation {
            daily: self.daily,
            weekly: self.weekly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_save_dir() -> PathBuf {
    PathBuf::from(".hoops-idle")
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_debounce_ms() -> u64 {
    1_000
}

fn default_max_catch_up_secs() -> u64 {
    60
}

fn default_active_challenges() -> usize {
    3
}

fn default_log_filter() -> String {
    "info".to_string()
}
