//! Game configuration, read from TOML

use std::path::{Path, PathBuf};
use std::time::Duration;

use chess_core::{Board, Color, Player, SearchLimits, DEFAULT_QUIESCENCE_LIMIT};
use classical_engine::AiPlayer;
use serde::{Deserialize, Serialize};

use crate::error::RunnerError;
use crate::human::HumanPlayer;

fn default_quiescence_limit() -> i32 {
    DEFAULT_QUIESCENCE_LIMIT
}

/// Who sits on one side of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlayerConfig {
    Ai {
        /// Search depth in plies
        depth: u8,
        #[serde(default = "default_quiescence_limit")]
        quiescence_limit: i32,
        /// Per-move time budget in milliseconds
        #[serde(default)]
        move_time_ms: Option<u64>,
        /// Fixed tie-breaking seed
        #[serde(default)]
        seed: Option<u64>,
    },
    Human,
}

impl PlayerConfig {
    pub fn ai(depth: u8) -> Self {
        PlayerConfig::Ai {
            depth,
            quiescence_limit: DEFAULT_QUIESCENCE_LIMIT,
            move_time_ms: None,
            seed: None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }

    /// Builds the player; humans read from stdin and write to stdout.
    pub fn build(&self, color: Color) -> Box<dyn Player> {
        match *self {
            PlayerConfig::Ai {
                depth,
                quiescence_limit,
                move_time_ms,
                seed,
            } => {
                let limits = match move_time_ms {
                    Some(ms) => SearchLimits::depth_and_time(depth, Duration::from_millis(ms)),
                    None => SearchLimits::depth(depth),
                }
                .with_quiescence_limit(quiescence_limit);
                let ai = AiPlayer::with_limits(color, limits);
                match seed {
                    Some(seed) => Box::new(ai.with_seed(seed)),
                    None => Box::new(ai),
                }
            }
            PlayerConfig::Human => Box::new(HumanPlayer::stdio(color)),
        }
    }
}

/// One game: start position, players and where to store the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Start position; the standard setup when absent
    pub start_fen: Option<String>,
    /// Plies after which the game is stopped undecided
    pub max_plies: u32,
    pub white: PlayerConfig,
    pub black: PlayerConfig,
    /// JSON game record destination
    pub output: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_fen: None,
            max_plies: 400,
            white: PlayerConfig::ai(2),
            black: PlayerConfig::ai(3),
            output: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RunnerError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn start_board(&self) -> Result<Board, RunnerError> {
        match &self.start_fen {
            Some(fen) => Ok(Board::from_fen(fen)?),
            None => Ok(Board::startpos()),
        }
    }

    pub fn player(&self, color: Color) -> &PlayerConfig {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
