use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use crate::error::LeaderboardError;

pub const DEFAULT_PATH: &str = "highscores.txt";

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    NewHighScore,
    Appended,
}

/// High scores in file order. The first entry is the best score ever recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Leaderboard::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Parses `<name> <score>` lines. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, LeaderboardError> {
        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || LeaderboardError::Malformed {
                line: index + 1,
                content: line.to_string(),
            };
            let mut fields = line.split_whitespace();
            let name = fields.next().ok_or_else(malformed)?;
            let score = fields
                .next()
                .and_then(|s| s.parse::<f64>().ok())
                .ok_or_else(malformed)?;
            if fields.next().is_some() {
                return Err(malformed());
            }
            entries.push(Entry {
                name: name.to_string(),
                score,
            });
        }
        Ok(Leaderboard { entries })
    }

    /// Loads the board from disk. A missing file is an empty board.
    pub fn load(path: &Path) -> Result<Self, LeaderboardError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no leaderboard yet");
                Ok(Leaderboard::new())
            }
            Err(source) => Err(LeaderboardError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// A score beating every recorded score goes to the top; anything else
    /// goes to the bottom. Existing entries keep their relative order.
    pub fn insert(&mut self, name: &str, score: f64) -> Placement {
        let entry = Entry {
            name: name.to_string(),
            score,
        };
        if self.entries.iter().all(|e| score > e.score) {
            self.entries.insert(0, entry);
            Placement::NewHighScore
        } else {
            self.entries.push(entry);
            Placement::Appended
        }
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{} {:.3}\n", entry.name, entry.score))
            .collect()
    }

    pub fn save(&self, path: &Path) -> Result<(), LeaderboardError> {
        fs::write(path, self.render()).map_err(|source| LeaderboardError::Io {
            path: PathBuf::from(path),
            source,
        })
    }
}
