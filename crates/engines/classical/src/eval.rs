//! Material evaluation with a lone-king endgame term.

use chess_core::{file_of, rank_of, Board, Color, PieceKind};

/// Piece values, in the same units as [`WIN`].
pub const PAWN: i32 = 30;
pub const KNIGHT: i32 = 85;
pub const BISHOP: i32 = 84;
pub const ROOK: i32 = 90;
pub const QUEEN: i32 = 300;

/// Magnitude of a won game.
pub const WIN: i32 = 50_000;

/// A king outweighs a full set of other pieces plus a win.
pub const KING: i32 = 8 * PAWN + 2 * ROOK + 2 * KNIGHT + 2 * BISHOP + QUEEN + WIN;

/// Base value of a piece kind; the king counts separately.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN,
        PieceKind::Knight => KNIGHT,
        PieceKind::Bishop => BISHOP,
        PieceKind::Rook => ROOK,
        PieceKind::Queen => QUEEN,
        PieceKind::King => 0,
    }
}

/// Non-king material of `color`, pawns gaining one point per rank advanced.
pub fn material(board: &Board, color: Color) -> i32 {
    (0..64u8)
        .filter_map(|sq| board.piece_at(sq).map(|pc| (sq, pc)))
        .filter(|(_, pc)| pc.color() == color)
        .map(|(sq, pc)| {
            let mut value = piece_value(pc.kind());
            if pc.kind() == PieceKind::Pawn {
                let rank = i32::from(rank_of(sq));
                value += match color {
                    Color::White => rank - 1,
                    Color::Black => 6 - rank,
                };
            }
            value
        })
        .sum()
}

/// Bonus for a king without enough material to mate on its own:
/// keep away from the edges and from the enemy king.
fn lone_king_bonus(king: u8, enemy_king: Option<u8>) -> i32 {
    let (row, col) = (i32::from(rank_of(king)), i32::from(file_of(king)));
    let edge_row = row.min(7 - row);
    let edge_col = col.min(7 - col);
    let mut bonus = edge_row.min(edge_col) + edge_row + edge_col - 6;

    if let Some(enemy) = enemy_king {
        let (er, ec) = (i32::from(rank_of(enemy)), i32::from(file_of(enemy)));
        bonus += (row - er).abs() + (col - ec).abs();
    }
    bonus
}

fn side_total(board: &Board, color: Color) -> i32 {
    let mut total = material(board, color);
    if let Some(king) = board.king_square(color) {
        if total < ROOK {
            total += lone_king_bonus(king, board.king_square(color.other()));
        }
        total += KING;
    }
    total
}

/// Evaluates the board for `owner` as `own - opponent`.
///
/// The result is negated when `owner` is not the side to move, so the value
/// is always relative to the side to move, as negamax expects.
pub fn evaluate(board: &Board, owner: Color) -> i32 {
    let score = side_total(board, owner) - side_total(board, owner.other());
    if board.side_to_move() == owner {
        score
    } else {
        -score
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
