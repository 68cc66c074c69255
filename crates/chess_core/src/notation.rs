use crate::{board::Board, types::*};

/// Coordinate notation, e.g. `e2e4`. Promotion is always to a queen, so no suffix.
pub fn move_to_string(mv: &Move) -> String {
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    s
}

/// Parses and validates a move for the side to move.
///
/// Letters may be upper or lower case. Anything that is not a valid move in
/// this position yields `None`; the returned move is fully canonicalized and
/// ready for [`Board::apply`].
pub fn parse_move(board: &Board, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if txt.len() != 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let piece = board.piece_at(from)?;

    let mut mv = Move::new(from, to, piece);
    if board.is_valid_move(board.side_to_move(), &mut mv) {
        Some(mv)
    } else {
        tracing::debug!(input = txt, "rejected move");
        None
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
