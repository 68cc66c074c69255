#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Upper-case letter used by the position codec.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece descriptor packed into one byte.
///
/// Bits 0..3 hold the kind, bit 4 the color and bits 5..7 the
/// "has moved", "en-passant eligible" and "promoted" flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

const KIND_MASK: u8 = 0x07;
const BLACK_BIT: u8 = 0x10;
const MOVED_BIT: u8 = 0x20;
const PASSANT_BIT: u8 = 0x40;
const PROMOTED_BIT: u8 = 0x80;

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        let color_bit = match color {
            Color::White => 0,
            Color::Black => BLACK_BIT,
        };
        Piece(kind as u8 | color_bit)
    }

    pub fn kind(self) -> PieceKind {
        match self.0 & KIND_MASK {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    pub fn color(self) -> Color {
        if self.0 & BLACK_BIT != 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn has_moved(self) -> bool {
        self.0 & MOVED_BIT != 0
    }

    pub fn is_en_passant(self) -> bool {
        self.0 & PASSANT_BIT != 0
    }

    pub fn is_promoted(self) -> bool {
        self.0 & PROMOTED_BIT != 0
    }

    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color() == color && self.kind() == kind
    }

    /// Copy of this piece with the "has moved" flag set.
    pub fn moved(self) -> Self {
        Piece(self.0 | MOVED_BIT)
    }

    pub fn with_moved(self, moved: bool) -> Self {
        if moved {
            self.moved()
        } else {
            Piece(self.0 & !MOVED_BIT)
        }
    }

    pub fn with_en_passant(self, flag: bool) -> Self {
        if flag {
            Piece(self.0 | PASSANT_BIT)
        } else {
            Piece(self.0 & !PASSANT_BIT)
        }
    }

    /// A promoted queen of this piece's color, already moved.
    pub fn promoted(self) -> Self {
        Piece::new(self.color(), PieceKind::Queen)
            .moved()
            .with_promoted_bit()
    }

    fn with_promoted_bit(self) -> Self {
        Piece(self.0 | PROMOTED_BIT)
    }

    /// Placement letter: upper case for white, lower case for black.
    pub fn to_char(self) -> char {
        let c = self.kind().letter();
        match self.color() {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())?;
        if self.has_moved() {
            write!(f, "+moved")?;
        }
        if self.is_en_passant() {
            write!(f, "+ep")?;
        }
        if self.is_promoted() {
            write!(f, "+promoted")?;
        }
        Ok(())
    }
}

/// A move that carries everything needed to undo it.
///
/// `piece` is the exact descriptor on the origin square before the move,
/// `prior_en_passant` and `prior_halfmove_clock` are the board values that
/// were active before it was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub prior_en_passant: Option<u8>,
    pub prior_halfmove_clock: u32,
}

impl Move {
    pub fn new(from: u8, to: u8, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            prior_en_passant: None,
            prior_halfmove_clock: 0,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Pawn capture of the pawn standing beside the origin square.
    pub fn is_en_passant(&self) -> bool {
        self.piece.kind() == PieceKind::Pawn
            && self.captured.is_some_and(|c| c.is_en_passant())
            && self.prior_en_passant.is_some()
            && self.prior_en_passant == sq(file_of(self.to), rank_of(self.from))
    }

    /// An unmoved king landing on one of the four castling squares.
    pub fn is_castle(&self) -> bool {
        self.piece.kind() == PieceKind::King
            && !self.piece.has_moved()
            && castle_rook_squares(self.to).is_some()
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

/// Parses a square name such as `e4`; the file letter may be upper case.
pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

/// Rook origin and destination for a king landing on a castling square.
pub fn castle_rook_squares(king_to: u8) -> Option<(u8, u8)> {
    match king_to {
        G1 => Some((H1, F1)),
        C1 => Some((A1, D1)),
        G8 => Some((H8, F8)),
        C8 => Some((A8, D8)),
        _ => None,
    }
}

pub const A1: u8 = 0;
pub const B1: u8 = 1;
pub const C1: u8 = 2;
pub const D1: u8 = 3;
pub const E1: u8 = 4;
pub const F1: u8 = 5;
pub const G1: u8 = 6;
pub const H1: u8 = 7;
pub const A8: u8 = 56;
pub const B8: u8 = 57;
pub const C8: u8 = 58;
pub const D8: u8 = 59;
pub const E8: u8 = 60;
pub const F8: u8 = 61;
pub const G8: u8 = 62;
pub const H8: u8 = 63;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
