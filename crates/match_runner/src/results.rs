//! Game records: JSON storage and a text summary

use std::fmt;
use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::RunnerError;

/// Serializable side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::White => "white",
            Side::Black => "black",
        })
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameOutcome {
    Checkmate { winner: Side },
    Stalemate,
    FiftyMoveDraw,
    /// A player had no move to offer
    Resignation { winner: Side },
    /// Stopped at the configured ply cap
    PlyLimit,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match *self {
            GameOutcome::Checkmate { winner } | GameOutcome::Resignation { winner } => Some(winner),
            _ => None,
        }
    }

    /// Result in PGN notation
    pub fn result_str(&self) -> &'static str {
        match self.winner() {
            Some(Side::White) => "1-0",
            Some(Side::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => f.write_str("stalemate"),
            GameOutcome::FiftyMoveDraw => f.write_str("draw by the fifty-move rule"),
            GameOutcome::Resignation { winner } => write!(f, "resignation, {winner} wins"),
            GameOutcome::PlyLimit => f.write_str("ply limit reached"),
        }
    }
}

/// One half-move of a recorded game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub mv: String,
    /// Position after the move
    pub fen: String,
    pub evaluation: Option<i32>,
}

/// Complete game record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub start_fen: String,
    pub moves: Vec<PlyRecord>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn final_fen(&self) -> &str {
        self.moves.last().map_or(&self.start_fen, |ply| &ply.fen)
    }

    /// Save the record to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), RunnerError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a record from a JSON file
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text summary
    pub fn summary(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n", self.white, self.black));
        report.push_str(&format!("Start: {}\n\n", self.start_fen));

        for (i, ply) in self.moves.iter().enumerate() {
            match ply.evaluation {
                Some(eval) => report.push_str(&format!("{:>4}. {:<6} {:>7}\n", i + 1, ply.mv, eval)),
                None => report.push_str(&format!("{:>4}. {}\n", i + 1, ply.mv)),
            }
        }

        report.push_str(&format!(
            "\nResult: {} ({})\nFinal: {}\n",
            self.outcome.result_str(),
            self.outcome,
            self.final_fen()
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
