use crate::error::BoardError;
use crate::types::*;

/// Mailbox board with incrementally maintained king squares and piece counts.
///
/// A board is mutated in place by [`Board::apply`] and restored by
/// [`Board::undo`]; the move itself carries the prior en-passant target and
/// halfmove clock, so no history stack is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) king_squares: [Option<u8>; 2],
    /// Square of the pawn that just advanced two ranks.
    pub(crate) en_passant: Option<u8>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) piece_counts: [u32; 2],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces, white to move.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            king_squares: [None; 2],
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            piece_counts: [0; 2],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        b.squares = default_placement();
        b.recount_pieces();
        b
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub(crate) fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, c: Color) -> Option<u8> {
        self.king_squares[c.idx()]
    }

    pub fn en_passant(&self) -> Option<u8> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_count(&self, c: Color) -> u32 {
        self.piece_counts[c.idx()]
    }

    pub fn total_pieces(&self) -> u32 {
        self.piece_counts[0] + self.piece_counts[1]
    }

    /// Recomputes piece counts and king squares from the squares.
    pub fn recount_pieces(&mut self) {
        self.piece_counts = [0; 2];
        self.king_squares = [None; 2];
        for (i, pc) in self.squares.iter().enumerate() {
            if let Some(pc) = pc {
                self.piece_counts[pc.color().idx()] += 1;
                if pc.kind() == PieceKind::King {
                    self.king_squares[pc.color().idx()] = Some(i as u8);
                }
            }
        }
    }

    /// Applies a move generated (or canonicalized) for this exact position.
    pub fn apply(&mut self, mv: &Move) -> Result<(), BoardError> {
        let from = mv.from;
        let to = mv.to;
        let en_passant_capture = mv.is_en_passant();
        let captured_sq = if en_passant_capture {
            sq(file_of(to), rank_of(from)).unwrap_or(to)
        } else {
            to
        };

        self.expect_piece(from, Some(mv.piece))?;
        self.expect_piece(captured_sq, mv.captured)?;

        // The en-passant marker lives for one ply only.
        if let Some(ep) = self.en_passant.take()
            && let Some(pc) = self.piece_at(ep)
        {
            self.set_piece(ep, Some(pc.with_en_passant(false)));
        }

        if mv.piece.kind() == PieceKind::Pawn || mv.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        let color = mv.piece.color();
        match mv.piece.kind() {
            PieceKind::King => {
                if mv.is_castle()
                    && let Some((rook_from, rook_to)) = castle_rook_squares(to)
                    && let Some(rook) = self.piece_at(rook_from)
                {
                    self.set_piece(rook_from, None);
                    self.set_piece(rook_to, Some(rook.moved()));
                }
                self.set_piece(from, None);
                self.set_piece(to, Some(mv.piece.moved()));
                self.king_squares[color.idx()] = Some(to);
            }
            PieceKind::Pawn => {
                if en_passant_capture {
                    self.set_piece(captured_sq, None);
                }
                let promotion_rank = match color {
                    Color::White => 7,
                    Color::Black => 0,
                };
                let placed = if rank_of(to) == promotion_rank {
                    mv.piece.promoted()
                } else if (rank_of(to) - rank_of(from)).abs() == 2 {
                    self.en_passant = Some(to);
                    mv.piece.moved().with_en_passant(true)
                } else {
                    mv.piece.moved().with_en_passant(false)
                };
                self.set_piece(from, None);
                self.set_piece(to, Some(placed));
            }
            _ => {
                self.set_piece(from, None);
                self.set_piece(to, Some(mv.piece.moved()));
            }
        }

        if let Some(cap) = mv.captured {
            let count = &mut self.piece_counts[cap.color().idx()];
            *count = count.saturating_sub(1);
            if cap.kind() == PieceKind::King {
                self.king_squares[cap.color().idx()] = None;
            }
        }

        if from != to {
            if self.side_to_move == Color::Black {
                self.fullmove_number += 1;
            }
            self.side_to_move = self.side_to_move.other();
        }

        self.debug_verify()
    }

    /// Restores the board to the state before `mv` was applied.
    pub fn undo(&mut self, mv: &Move) -> Result<(), BoardError> {
        let from = mv.from;
        let to = mv.to;
        let color = mv.piece.color();

        let landed = self.piece_at(to);
        let expected_kind = match landed {
            Some(pc) if pc.is_promoted() && mv.piece.kind() == PieceKind::Pawn => PieceKind::Queen,
            _ => mv.piece.kind(),
        };
        if !landed.is_some_and(|pc| pc.is(color, expected_kind)) {
            return Err(mismatch(to, Some(mv.piece), landed));
        }

        if from != to {
            self.side_to_move = self.side_to_move.other();
            if self.side_to_move == Color::Black {
                self.fullmove_number = self.fullmove_number.saturating_sub(1);
            }
        }

        let en_passant_capture = mv.is_en_passant();
        self.set_piece(from, Some(mv.piece));
        if en_passant_capture {
            self.set_piece(to, None);
            if let Some(cap_sq) = sq(file_of(to), rank_of(from)) {
                self.set_piece(cap_sq, mv.captured);
            }
        } else {
            self.set_piece(to, mv.captured);
        }

        if mv.piece.kind() == PieceKind::King {
            if mv.is_castle()
                && let Some((rook_from, rook_to)) = castle_rook_squares(to)
                && let Some(rook) = self.piece_at(rook_to)
            {
                self.set_piece(rook_to, None);
                self.set_piece(rook_from, Some(rook.with_moved(false)));
            }
            self.king_squares[color.idx()] = Some(from);
        }

        if let Some(cap) = mv.captured {
            self.piece_counts[cap.color().idx()] += 1;
            if cap.kind() == PieceKind::King {
                self.king_squares[cap.color().idx()] = Some(to);
            }
        }

        self.halfmove_clock = mv.prior_halfmove_clock;
        self.en_passant = mv.prior_en_passant;
        if let Some(ep) = self.en_passant
            && let Some(pc) = self.piece_at(ep)
        {
            self.set_piece(ep, Some(pc.with_en_passant(true)));
        }

        self.debug_verify()
    }

    fn expect_piece(&self, square: u8, expected: Option<Piece>) -> Result<(), BoardError> {
        let found = self.piece_at(square);
        if found == expected {
            Ok(())
        } else {
            Err(mismatch(square, expected, found))
        }
    }

    /// Checks the incrementally maintained state against the squares.
    pub fn verify(&self) -> Result<(), BoardError> {
        let flagged: Vec<u8> = (0..64u8)
            .filter(|&s| self.piece_at(s).is_some_and(|pc| pc.is_en_passant()))
            .collect();
        if flagged.len() > 1 {
            return Err(BoardError::MultipleEnPassantFlags {
                count: flagged.len(),
            });
        }
        if let Some(&s) = flagged.first()
            && self.en_passant != Some(s)
        {
            return Err(BoardError::EnPassantTargetMismatch {
                flagged: sq_to_coord(s),
                target: self.en_passant.map(sq_to_coord).unwrap_or_else(|| "-".into()),
            });
        }

        let mut counts = [0u32; 2];
        for pc in self.squares.iter().flatten() {
            counts[pc.color().idx()] += 1;
        }
        for color in [Color::White, Color::Black] {
            if let Some(k) = self.king_square(color)
                && !self.piece_at(k).is_some_and(|pc| pc.is(color, PieceKind::King))
            {
                return Err(BoardError::KingCacheMismatch {
                    color: format!("{color:?}"),
                    cached: sq_to_coord(k),
                });
            }
            if counts[color.idx()] != self.piece_count(color) {
                return Err(BoardError::PieceCountMismatch {
                    color: format!("{color:?}"),
                    cached: self.piece_count(color),
                    actual: counts[color.idx()],
                });
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_verify(&self) -> Result<(), BoardError> {
        self.verify().inspect_err(|e| {
            tracing::error!(error = %e, "board invariant violated");
        })
    }

    #[cfg(not(debug_assertions))]
    fn debug_verify(&self) -> Result<(), BoardError> {
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

/// Pieces of the standard initial setup, all unmoved.
pub fn default_placement() -> [Option<Piece>; 64] {
    let mut squares = [None; 64];
    for (f, &kind) in BACK_RANK.iter().enumerate() {
        squares[f] = Some(Piece::new(Color::White, kind));
        squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
        squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        squares[56 + f] = Some(Piece::new(Color::Black, kind));
    }
    squares
}

fn mismatch(square: u8, expected: Option<Piece>, found: Option<Piece>) -> BoardError {
    let describe = |p: Option<Piece>| match p {
        Some(pc) => format!("{pc:?}"),
        None => "empty".to_string(),
    };
    BoardError::PieceMismatch {
        square: sq_to_coord(square),
        expected: describe(expected),
        found: describe(found),
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
