use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
    #[error("input closed before a valid answer was given")]
    InputClosed,
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to access leaderboard file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed leaderboard line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no decisive games as the number of games ({games}) is equal to the number of tied ({tied}).")]
    NoDecisiveGames { games: u32, tied: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("dealer_stands_on must be between 2 and 21 (got {value})")]
    InvalidThreshold { value: u8 },
}
