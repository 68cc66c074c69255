use std::path::PathBuf;

use chess_core::{BoardError, Color, FenError};
use thiserror::Error;

/// Everything that can end a game early or stop a config/record from loading.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid game config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid game record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("invalid start position: {0}")]
    Fen(#[from] FenError),

    #[error("board invariant violated: {0}")]
    Board(#[from] BoardError),

    #[error("{player} offered an illegal move {mv}")]
    IllegalMove { player: String, mv: String },

    #[error("{player} plays {actual:?} but was seated as {seat:?}")]
    SeatMismatch {
        player: String,
        seat: Color,
        actual: Color,
    },

    #[error("piece count drifted after {mv}: cached {cached}, recounted {actual}")]
    PieceCount { mv: String, cached: u32, actual: u32 },
}
