//! Attack detection by ray scanning from the target square.
//!
//! Every direction is walked with explicit file/rank bounds, so no ray or
//! knight jump wraps around a board edge.

use crate::board::Board;
use crate::types::*;

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

impl Board {
    /// True if any piece of color `by` attacks `target`.
    pub fn is_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn of `by` attacks from one rank behind its direction of travel.
        let pawn_rank = match by {
            Color::White => -1,
            Color::Black => 1,
        };

        for (df, dr) in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
            let diagonal = *df != 0 && *dr != 0;
            let mut f = tf + df;
            let mut r = tr + dr;
            let mut distance = 1;
            while let Some(s) = sq(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color() == by {
                        let hit = match pc.kind() {
                            PieceKind::Queen => true,
                            PieceKind::Rook => !diagonal,
                            PieceKind::Bishop => diagonal,
                            PieceKind::King => distance == 1,
                            PieceKind::Pawn => diagonal && distance == 1 && *dr == pawn_rank,
                            PieceKind::Knight => false,
                        };
                        if hit {
                            return true;
                        }
                    }
                    break;
                }
                f += df;
                r += dr;
                distance += 1;
            }
        }

        for (df, dr) in KNIGHT_JUMPS {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.is(by, PieceKind::Knight)
            {
                return true;
            }
        }

        false
    }

    /// True if `c`'s king is attacked. A board without that king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(k) => self.is_attacked(k, c.other()),
            None => false,
        }
    }

    /// True if the two kings stand on neighbouring squares.
    pub fn kings_adjacent(&self) -> bool {
        match (self.king_square(Color::White), self.king_square(Color::Black)) {
            (Some(w), Some(b)) => {
                let df = (file_of(w) - file_of(b)).abs();
                let dr = (rank_of(w) - rank_of(b)).abs();
                df.max(dr) == 1
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
