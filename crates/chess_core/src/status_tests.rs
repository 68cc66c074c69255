use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn test_startpos_is_normal() {
    let b = Board::startpos();
    assert_eq!(b.status(Color::White), Status::Normal);
    assert_eq!(b.status(Color::Black), Status::Normal);
}

#[test]
fn test_check_with_escape() {
    let b = board("4k3/8/8/8/8/8/8/4RK2 b - - 0 1");
    assert_eq!(b.status(Color::Black), Status::InCheck);
    assert!(Status::InCheck.is_ongoing());
}

#[test]
fn test_back_rank_mate() {
    let b = board("R3k3/8/4K3/8/8/8/8/8 b - - 0 1");
    assert_eq!(b.status(Color::Black), Status::Checkmate);
    assert!(!b.has_legal_move(Color::Black));
}

#[test]
fn test_stalemate() {
    let b = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(b.status(Color::Black), Status::Stalemate);
    assert!(!Status::Stalemate.is_ongoing());
}

#[test]
fn test_fifty_move_rule_beats_mate() {
    let b = board("R3k3/8/4K3/8/8/8/8/8 b - - 50 80");
    assert_eq!(b.status(Color::Black), Status::Draw);
    assert_eq!(b.status(Color::White), Status::Draw);
}

#[test]
fn test_pinned_piece_cannot_move() {
    let b = board("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let bishop = b.piece_at(12).unwrap();
    let mut pinned = Move::new(12, 19, bishop);
    assert!(!b.is_valid_move(Color::White, &mut pinned));
    assert_eq!(pinned, Move::new(12, 19, bishop));

    let king = b.piece_at(E1).unwrap();
    let mut step = Move::new(E1, D1, king);
    assert!(b.is_valid_move(Color::White, &mut step));
}

#[test]
fn test_validation_canonicalizes_capture() {
    let b = board("4k3/8/8/8/8/8/4p3/4K3 w - - 9 20");
    let king = b.piece_at(E1).unwrap();
    let mut take = Move::new(E1, 12, king);
    assert!(b.is_valid_move(Color::White, &mut take));
    assert!(take.captured.is_some_and(|p| p.is(Color::Black, PieceKind::Pawn)));
    assert_eq!(take.prior_halfmove_clock, 9);
}

#[test]
fn test_validation_rejects_wrong_color() {
    let b = Board::startpos();
    let pawn = b.piece_at(52).unwrap(); // e7
    let mut mv = Move::new(52, 44, pawn);
    assert!(!b.is_valid_move(Color::White, &mut mv));
    assert!(b.is_valid_move(Color::Black, &mut mv));
}
