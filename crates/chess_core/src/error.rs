//! Error types for board mutation and position decoding.

use thiserror::Error;

/// An internal invariant was broken while applying or undoing a move.
///
/// These point at a programming error (a move applied to the wrong board,
/// an undo out of order); the failing operation is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} on {square}, found {found}")]
    PieceMismatch {
        square: String,
        expected: String,
        found: String,
    },
    #[error("{count} squares carry the en-passant flag")]
    MultipleEnPassantFlags { count: usize },
    #[error("en-passant flag on {flagged} does not match target {target}")]
    EnPassantTargetMismatch { flagged: String, target: String },
    #[error("cached {color} king square {cached} does not hold the king")]
    KingCacheMismatch { color: String, cached: String },
    #[error("{color} piece count is {cached}, board holds {actual}")]
    PieceCountMismatch {
        color: String,
        cached: u32,
        actual: u32,
    },
}

/// A position string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN '{fen}': missing {field} field")]
    MissingField { fen: String, field: &'static str },
    #[error("FEN '{fen}': unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { fen: String, ch: char, pos: usize },
    #[error("FEN '{fen}': rank {rank} describes {files} files")]
    BadRankLength { fen: String, rank: usize, files: usize },
    #[error("FEN '{fen}': expected 8 ranks, found {found}")]
    BadRankCount { fen: String, found: usize },
    #[error("FEN '{fen}': invalid side to move '{side}'")]
    BadSideToMove { fen: String, side: String },
    #[error("FEN '{fen}': invalid en-passant field '{field}' at position {pos}")]
    BadEnPassant {
        fen: String,
        field: String,
        pos: usize,
    },
    #[error("FEN '{fen}': invalid {field} '{value}'")]
    BadCounter {
        fen: String,
        field: &'static str,
        value: String,
    },
    #[error("FEN '{fen}': expected one {color} king, found {found}")]
    KingCount {
        fen: String,
        color: &'static str,
        found: usize,
    },
}
