//! Forsyth-Edwards position codec.
//!
//! Decoding rebuilds the "has moved" flags the board relies on for castling
//! and pawn double steps: a piece counts as unmoved only if the standard
//! setup has the same piece on its square, and the corner rooks and kings
//! are released again by the castling field.

use crate::board::{Board, default_placement};
use crate::error::FenError;
use crate::types::*;

impl Board {
    /// Decodes a position string. Halfmove clock and fullmove number may be omitted.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let fields = split_fields(fen);
        let field = |idx: usize, name: &'static str| {
            fields.get(idx).copied().ok_or(FenError::MissingField {
                fen: fen.to_string(),
                field: name,
            })
        };

        let (placement_pos, placement) = field(0, "piece placement")?;
        let (_, side) = field(1, "side to move")?;
        let (castling_pos, castling) = field(2, "castling")?;
        let (ep_pos, ep) = field(3, "en-passant")?;

        let mut board = Board::empty();
        parse_placement(fen, placement_pos, placement, &mut board)?;

        board.side_to_move = match side {
            "w" | "W" => Color::White,
            "b" | "B" => Color::Black,
            _ => {
                return Err(FenError::BadSideToMove {
                    fen: fen.to_string(),
                    side: side.to_string(),
                });
            }
        };

        parse_castling(fen, castling_pos, castling, &mut board)?;
        parse_en_passant(fen, ep_pos, ep, &mut board)?;

        board.halfmove_clock = parse_counter(fen, fields.get(4), "halfmove clock", 0)?;
        board.fullmove_number = parse_counter(fen, fields.get(5), "fullmove number", 1)?;

        board.recount_pieces();
        for (color, name) in [(Color::White, "white"), (Color::Black, "black")] {
            let found = board
                .squares
                .iter()
                .flatten()
                .filter(|pc| pc.is(color, PieceKind::King))
                .count();
            if found != 1 {
                return Err(FenError::KingCount {
                    fen: fen.to_string(),
                    color: name,
                    found,
                });
            }
        }
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(rank * 8 + file) {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank != 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let unmoved = |s: u8, color: Color, kind: PieceKind| {
            self.piece_at(s)
                .is_some_and(|pc| pc.is(color, kind) && !pc.has_moved())
        };
        let mut castling = String::new();
        for (letter, king, rook, color) in [
            ('K', E1, H1, Color::White),
            ('Q', E1, A1, Color::White),
            ('k', E8, H8, Color::Black),
            ('q', E8, A8, Color::Black),
        ] {
            if unmoved(king, color, PieceKind::King) && unmoved(rook, color, PieceKind::Rook) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&castling);

        fen.push(' ');
        match self.en_passant {
            Some(s) => {
                fen.push((b'a' + file_of(s) as u8) as char);
                fen.push(if rank_of(s) == 3 { '3' } else { '6' });
            }
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

/// Whitespace-separated fields with their byte offsets.
fn split_fields(fen: &str) -> Vec<(usize, &str)> {
    let mut fields = Vec::new();
    let mut start = None;
    for (i, ch) in fen.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                fields.push((s, &fen[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        fields.push((s, &fen[s..]));
    }
    fields
}

fn parse_placement(
    fen: &str,
    offset: usize,
    placement: &str,
    board: &mut Board,
) -> Result<(), FenError> {
    let defaults = default_placement();
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount {
            fen: fen.to_string(),
            found: ranks.len(),
        });
    }

    let mut pos = offset;
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += d as i8;
            } else if let Some(kind) = PieceKind::from_letter(ch) {
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let Some(s) = sq(file, rank) else {
                    return Err(bad_rank_length(fen, rank_idx, file + 1));
                };
                let piece = Piece::new(color, kind);
                let unmoved = defaults[s as usize] == Some(piece);
                board.set_piece(s, Some(piece.with_moved(!unmoved)));
                file += 1;
            } else {
                return Err(FenError::UnexpectedChar {
                    fen: fen.to_string(),
                    ch,
                    pos,
                });
            }
            pos += ch.len_utf8();
        }
        if file != 8 {
            return Err(bad_rank_length(fen, rank_idx, file));
        }
        pos += 1; // '/'
    }
    Ok(())
}

fn bad_rank_length(fen: &str, rank_idx: usize, files: i8) -> FenError {
    FenError::BadRankLength {
        fen: fen.to_string(),
        rank: 8 - rank_idx,
        files: files.max(0) as usize,
    }
}

fn parse_castling(
    fen: &str,
    offset: usize,
    castling: &str,
    board: &mut Board,
) -> Result<(), FenError> {
    for corner in [A1, H1, A8, H8] {
        if let Some(pc) = board.piece_at(corner) {
            board.set_piece(corner, Some(pc.moved()));
        }
    }
    if castling == "-" {
        return Ok(());
    }

    for (i, ch) in castling.char_indices() {
        let (king_sq, rook_sq, color) = match ch {
            'K' => (E1, H1, Color::White),
            'Q' => (E1, A1, Color::White),
            'k' => (E8, H8, Color::Black),
            'q' => (E8, A8, Color::Black),
            _ => {
                return Err(FenError::UnexpectedChar {
                    fen: fen.to_string(),
                    ch,
                    pos: offset + i,
                });
            }
        };
        for (s, kind) in [(king_sq, PieceKind::King), (rook_sq, PieceKind::Rook)] {
            if let Some(pc) = board.piece_at(s)
                && pc.is(color, kind)
            {
                board.set_piece(s, Some(pc.with_moved(false)));
            }
        }
    }
    Ok(())
}

fn parse_en_passant(fen: &str, offset: usize, ep: &str, board: &mut Board) -> Result<(), FenError> {
    if ep == "-" {
        return Ok(());
    }
    let bytes = ep.as_bytes();
    let malformed = || FenError::BadEnPassant {
        fen: fen.to_string(),
        field: ep.to_string(),
        pos: offset,
    };
    if bytes.len() != 2 || !(b'a'..=b'h').contains(&bytes[0]) {
        return Err(malformed());
    }
    // The field names the skipped square; the board tracks the pawn itself.
    let (rank, pawn_color) = match bytes[1] {
        b'3' => (3, Color::White),
        b'6' => (4, Color::Black),
        _ => return Err(malformed()),
    };
    let Some(target) = sq((bytes[0] - b'a') as i8, rank) else {
        return Err(malformed());
    };
    let skipped = match pawn_color {
        Color::White => sq((bytes[0] - b'a') as i8, 2),
        Color::Black => sq((bytes[0] - b'a') as i8, 5),
    };
    if skipped.is_some_and(|square| board.piece_at(square).is_some()) {
        return Err(malformed());
    }
    match board.piece_at(target) {
        Some(pc) if pc.is(pawn_color, PieceKind::Pawn) => {
            board.set_piece(target, Some(pc.with_en_passant(true)));
            board.en_passant = Some(target);
        }
        _ => {
            tracing::warn!(fen, square = %sq_to_coord(target), "en-passant field names no pawn, ignored");
        }
    }
    Ok(())
}

fn parse_counter(
    fen: &str,
    field: Option<&(usize, &str)>,
    name: &'static str,
    default: u32,
) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some((_, text)) => text.parse().map_err(|_| FenError::BadCounter {
            fen: fen.to_string(),
            field: name,
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
