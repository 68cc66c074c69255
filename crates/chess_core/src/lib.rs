pub mod attacks;
pub mod board;
pub mod display;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use display::render;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use status::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Player trait: implemented by the search-backed AI and by human input
// =============================================================================

/// A move chosen by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerChoice {
    /// The chosen move, canonical for the board it was chosen on
    pub mv: Move,
    /// Score of the position after the move, from the player's perspective
    pub evaluation: Option<i32>,
}

/// Trait that every participant in a game implements.
///
/// The driver owns the canonical board; players only ever see it by
/// reference and keep private copies if they need to mutate one.
pub trait Player: Send {
    /// The color this player moves.
    fn color(&self) -> Color;

    /// Display name used in logs and game records
    fn name(&self) -> &str;

    /// Called once before the first move of a game.
    fn prepare(&mut self, _board: &Board) {}

    /// Choose a move for the position.
    ///
    /// # Returns
    /// `None` if the player has no move to offer (no legal move, or a human
    /// gave up).
    fn get_move(&mut self, board: &Board) -> Option<PlayerChoice>;

    /// Called with the board after the opponent's `mv` was applied.
    fn show_move(&mut self, _board: &Board, _mv: &Move) {}
}
