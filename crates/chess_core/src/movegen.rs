use crate::attacks::{DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use crate::{board::Board, types::*};

const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Which moves the generator produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    All,
    /// Captures only (quiescence search). Castling is never produced.
    CapturesOnly,
}

/// Pseudo-legal moves split into non-captures and captures.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    pub quiet: Vec<Move>,
    pub captures: Vec<Move>,
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            quiet: Vec::with_capacity(64),
            captures: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.quiet.clear();
        self.captures.clear();
    }

    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    /// Captures first, then quiet moves.
    pub fn ordered(&self) -> impl Iterator<Item = &Move> {
        self.captures.iter().chain(self.quiet.iter())
    }

    fn push(&mut self, mv: Move) {
        if mv.captured.is_some() {
            self.captures.push(mv);
        } else {
            self.quiet.push(mv);
        }
    }
}

/// Generates pseudo-legal moves for `color` into `out`.
///
/// Moves may leave the mover's king attacked; callers filter by applying
/// the move and checking [`Board::in_check`]. Every move is stamped with the
/// board's current en-passant target and halfmove clock so it can be undone.
pub fn generate_moves(board: &Board, color: Color, mode: GenMode, out: &mut MoveList) {
    out.clear();
    for from in 0..64u8 {
        let pc = match board.piece_at(from) {
            Some(p) if p.color() == color => p,
            _ => continue,
        };
        match pc.kind() {
            PieceKind::Pawn => gen_pawn(board, from, pc, mode, out),
            PieceKind::Knight => gen_steps(board, from, pc, &KNIGHT_JUMPS, mode, out),
            PieceKind::Bishop => gen_slider(board, from, pc, &DIAGONAL, mode, out),
            PieceKind::Rook => gen_slider(board, from, pc, &ORTHOGONAL, mode, out),
            PieceKind::Queen => {
                gen_slider(board, from, pc, &DIAGONAL, mode, out);
                gen_slider(board, from, pc, &ORTHOGONAL, mode, out);
            }
            PieceKind::King => {
                gen_steps(board, from, pc, &KING_STEPS, mode, out);
                if mode == GenMode::All {
                    gen_castle(board, from, pc, out);
                }
            }
        }
    }

    for mv in out.quiet.iter_mut().chain(out.captures.iter_mut()) {
        mv.prior_en_passant = board.en_passant();
        mv.prior_halfmove_clock = board.halfmove_clock();
    }
}

/// All legal moves for the side to move, captures first.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mover = board.side_to_move();
    let mut list = MoveList::new();
    generate_moves(board, mover, GenMode::All, &mut list);

    list.ordered()
        .copied()
        .filter(|mv| leaves_king_safe(&mut tmp, mv, mover))
        .collect()
}

/// Applies `mv`, checks that `mover`'s king is not attacked and undoes it.
pub(crate) fn leaves_king_safe(board: &mut Board, mv: &Move, mover: Color) -> bool {
    if board.apply(mv).is_err() {
        return false;
    }
    let safe = !board.in_check(mover);
    board.undo(mv).is_ok() && safe
}

fn capture_at(board: &Board, to: u8, color: Color) -> Option<Option<Piece>> {
    match board.piece_at(to) {
        None => Some(None),
        Some(pc) if pc.color() != color => Some(Some(pc)),
        Some(_) => None,
    }
}

fn gen_pawn(board: &Board, from: u8, pc: Piece, mode: GenMode, out: &mut MoveList) {
    let f = file_of(from);
    let r = rank_of(from);
    let color = pc.color();
    let dir: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };

    // forward 1, and 2 for an unmoved pawn
    if mode == GenMode::All
        && let Some(to) = sq(f, r + dir)
        && board.piece_at(to).is_none()
    {
        out.push(Move::new(from, to, pc));
        if !pc.has_moved()
            && let Some(to2) = sq(f, r + 2 * dir)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2, pc));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color() != color => {
                let mut mv = Move::new(from, to, pc);
                mv.captured = Some(target);
                out.push(mv);
            }
            Some(_) => {}
            None => {
                if let Some(beside) = sq(f + df, r)
                    && let Some(target) = board.piece_at(beside)
                    && target.is(color.other(), PieceKind::Pawn)
                    && target.is_en_passant()
                {
                    let mut mv = Move::new(from, to, pc);
                    mv.captured = Some(target);
                    out.push(mv);
                }
            }
        }
    }
}

fn gen_steps(
    board: &Board,
    from: u8,
    pc: Piece,
    steps: &[(i8, i8)],
    mode: GenMode,
    out: &mut MoveList,
) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in steps {
        if let Some(to) = sq(f + df, r + dr)
            && let Some(captured) = capture_at(board, to, pc.color())
            && (captured.is_some() || mode == GenMode::All)
        {
            let mut mv = Move::new(from, to, pc);
            mv.captured = captured;
            out.push(mv);
        }
    }
}

fn gen_slider(
    board: &Board,
    from: u8,
    pc: Piece,
    dirs: &[(i8, i8)],
    mode: GenMode,
    out: &mut MoveList,
) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match board.piece_at(to) {
                None => {
                    if mode == GenMode::All {
                        out.push(Move::new(from, to, pc));
                    }
                }
                Some(target) => {
                    if target.color() != pc.color() {
                        let mut mv = Move::new(from, to, pc);
                        mv.captured = Some(target);
                        out.push(mv);
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

struct CastleRoute {
    king_to: u8,
    rook: u8,
    /// Squares between king and rook.
    between: &'static [u8],
    /// Squares the king passes through and lands on.
    crossed: [u8; 2],
}

const WHITE_CASTLES: [CastleRoute; 2] = [
    CastleRoute {
        king_to: G1,
        rook: H1,
        between: &[F1, G1],
        crossed: [F1, G1],
    },
    CastleRoute {
        king_to: C1,
        rook: A1,
        between: &[B1, C1, D1],
        crossed: [D1, C1],
    },
];

const BLACK_CASTLES: [CastleRoute; 2] = [
    CastleRoute {
        king_to: G8,
        rook: H8,
        between: &[F8, G8],
        crossed: [F8, G8],
    },
    CastleRoute {
        king_to: C8,
        rook: A8,
        between: &[B8, C8, D8],
        crossed: [D8, C8],
    },
];

fn gen_castle(board: &Board, from: u8, king: Piece, out: &mut MoveList) {
    let color = king.color();
    let (home, routes) = match color {
        Color::White => (E1, &WHITE_CASTLES),
        Color::Black => (E8, &BLACK_CASTLES),
    };
    if king.has_moved() || from != home {
        return;
    }
    let enemy = color.other();
    if board.is_attacked(from, enemy) {
        return;
    }

    for route in routes {
        let rook_ready = board
            .piece_at(route.rook)
            .is_some_and(|p| p.is(color, PieceKind::Rook) && !p.has_moved());
        if rook_ready
            && route.between.iter().all(|&s| board.piece_at(s).is_none())
            && route.crossed.iter().all(|&s| !board.is_attacked(s, enemy))
        {
            out.push(Move::new(from, route.king_to, king));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
