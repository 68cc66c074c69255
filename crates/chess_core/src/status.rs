//! Game status classification and move validation.

use crate::movegen::{GenMode, MoveList, generate_moves, leaves_king_safe};
use crate::{board::Board, types::*};

/// Halfmove clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

/// Status of one player, as surfaced to a game driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Normal,
    InCheck,
    Checkmate,
    Stalemate,
    Draw,
}

impl Status {
    /// True while the game goes on.
    pub fn is_ongoing(self) -> bool {
        matches!(self, Status::Normal | Status::InCheck)
    }
}

impl Board {
    /// Classifies `color`'s situation.
    ///
    /// The fifty-move draw wins over every other outcome, including mate.
    pub fn status(&self, color: Color) -> Status {
        if self.halfmove_clock() >= FIFTY_MOVE_LIMIT {
            return Status::Draw;
        }
        let in_check = self.in_check(color);
        match (self.has_legal_move(color), in_check) {
            (true, false) => Status::Normal,
            (true, true) => Status::InCheck,
            (false, true) => Status::Checkmate,
            (false, false) => Status::Stalemate,
        }
    }

    /// True if `color` has at least one move that keeps its king safe.
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut tmp = self.clone();
        let mut list = MoveList::new();
        generate_moves(self, color, GenMode::All, &mut list);
        list.ordered()
            .any(|mv| leaves_king_safe(&mut tmp, mv, color))
    }

    /// Checks a candidate move for `color` and canonicalizes it in place.
    ///
    /// The candidate only needs `from` and `to`; on success every other
    /// field is copied from the generated move. A rejected candidate is left
    /// untouched.
    pub fn is_valid_move(&self, color: Color, candidate: &mut Move) -> bool {
        let mut list = MoveList::new();
        generate_moves(self, color, GenMode::All, &mut list);
        let Some(generated) = list
            .ordered()
            .find(|mv| mv.from == candidate.from && mv.to == candidate.to)
            .copied()
        else {
            return false;
        };

        let mut tmp = self.clone();
        if leaves_king_safe(&mut tmp, &generated, color) {
            *candidate = generated;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
