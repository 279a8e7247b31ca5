use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::Level;

use crate::{
    error::ConfigError, game::GameRules, leaderboard, strategy::DEFAULT_DEALER_STANDS_ON,
};

fn default_highscores() -> PathBuf {
    PathBuf::from(leaderboard::DEFAULT_PATH)
}

fn default_dealer_stands_on() -> u8 {
    DEFAULT_DEALER_STANDS_ON
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Optional JSON configuration. Every field has a default, so `{}` is valid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_highscores")]
    pub highscores: PathBuf,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_dealer_stands_on")]
    pub dealer_stands_on: u8,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            highscores: default_highscores(),
            seed: None,
            dealer_stands_on: default_dealer_stands_on(),
            log_level: default_log_level(),
        }
    }
}

pub struct ValidatedConfig {
    pub highscores: PathBuf,
    pub seed: Option<u64>,
    pub rules: GameRules,
    pub log_level: Level,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;
        if !(2..=21).contains(&self.dealer_stands_on) {
            return Err(ConfigError::InvalidThreshold {
                value: self.dealer_stands_on,
            });
        }
        Ok(ValidatedConfig {
            highscores: self.highscores,
            seed: self.seed,
            rules: GameRules {
                dealer_stands_on: self.dealer_stands_on,
            },
            log_level,
        })
    }
}
