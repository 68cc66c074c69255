//! Text rendering of a board for consoles and logs.

use std::fmt;

use crate::{board::Board, types::*};

/// Renders the board with rank 8 on top.
///
/// Each cell shows `.` before an unmoved piece and a backtick after the pawn
/// that may be taken en passant. The squares of `last_move` open with `*`
/// instead of `|`.
pub fn render(board: &Board, last_move: Option<&Move>) -> String {
    let mut out = String::from("   ___ ___ ___ ___ ___ ___ ___ ___\n");
    for rank in (0..8u8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8u8 {
            let s = rank * 8 + file;
            let highlighted = last_move.is_some_and(|m| m.from == s || m.to == s);
            let open = if highlighted { '*' } else { '|' };
            let cell = match board.piece_at(s) {
                Some(pc) => {
                    let unmoved = if pc.has_moved() { ' ' } else { '.' };
                    let passant = if pc.is_en_passant() { '`' } else { ' ' };
                    format!("{open}{unmoved}{}{passant}", pc.to_char())
                }
                None => format!("{open}   "),
            };
            out.push_str(&cell);
        }
        out.push_str("|\n  |___|___|___|___|___|___|___|___|\n");
    }
    out.push_str("    a   b   c   d   e   f   g   h\n");
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, None))
    }
}
