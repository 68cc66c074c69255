use super::*;

fn pseudo(board: &Board, mode: GenMode) -> MoveList {
    let mut list = MoveList::new();
    generate_moves(board, board.side_to_move(), mode, &mut list);
    list
}

#[test]
fn test_startpos_moves() {
    let board = Board::startpos();
    // Starting position has 20 legal moves
    assert_eq!(legal_moves(&board).len(), 20);
    let list = pseudo(&board, GenMode::All);
    assert_eq!(list.len(), 20);
    assert!(list.captures.is_empty());
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    let moves = legal_moves(&board);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 8);
    assert_eq!(moves.iter().filter(|m| m.is_castle()).count(), 2);
}

#[test]
fn test_captures_come_first() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    let moves = legal_moves(&board);
    let first_quiet = moves.iter().position(|m| !m.is_capture()).unwrap();
    assert!(moves[first_quiet..].iter().all(|m| !m.is_capture()));
}

#[test]
fn test_captures_only_mode() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    let all = pseudo(&board, GenMode::All);
    let captures = pseudo(&board, GenMode::CapturesOnly);
    assert!(captures.quiet.is_empty());
    assert_eq!(captures.captures, all.captures);
}

#[test]
fn test_moves_are_stamped_with_prior_state() {
    let board = Board::from_fen("5k2/8/8/8/4Pp2/8/8/4K3 b - e3 7 30").unwrap();
    let list = pseudo(&board, GenMode::All);
    assert!(list.ordered().all(|m| m.prior_en_passant == Some(28)));
    assert!(list.ordered().all(|m| m.prior_halfmove_clock == 7));

    let ep = list.captures.iter().find(|m| m.from == 29 && m.to == 20).unwrap();
    assert!(ep.is_en_passant());
    assert!(ep.captured.is_some_and(|p| p.is(Color::White, PieceKind::Pawn)));
}

#[test]
fn test_castling_through_attacked_square() {
    // the rook on f2 covers f1 but not d1 or c1
    let board = Board::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    let castles: Vec<u8> = list.quiet.iter().filter(|m| m.is_castle()).map(|m| m.to).collect();
    assert_eq!(castles, vec![C1]);
}

#[test]
fn test_no_castling_out_of_check_or_with_moved_rook() {
    let board = Board::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    assert!(!list.quiet.iter().any(|m| m.is_castle()));

    // only the queenside rook keeps its right
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    let castles: Vec<u8> = list.quiet.iter().filter(|m| m.is_castle()).map(|m| m.to).collect();
    assert_eq!(castles, vec![C1]);
}

#[test]
fn test_queenside_needs_b_file_empty() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    assert!(!list.quiet.iter().any(|m| m.is_castle()));
}

#[test]
fn test_knight_on_h_file_has_two_moves() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2N w - - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    let mut targets: Vec<u8> = list.ordered().filter(|m| m.from == 7).map(|m| m.to).collect();
    targets.sort();
    assert_eq!(targets, vec![13, 22]);
}

#[test]
fn test_pawn_pushes_blocked() {
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    assert!(!list.ordered().any(|m| m.from == 12));

    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    let pushes: Vec<u8> = list.ordered().filter(|m| m.from == 12).map(|m| m.to).collect();
    assert_eq!(pushes, vec![20]);
}

#[test]
fn test_moved_pawn_has_no_double_step() {
    // a white pawn on e3 is never on its home square
    let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").unwrap();
    let list = pseudo(&board, GenMode::All);
    let pushes: Vec<u8> = list.ordered().filter(|m| m.from == 20).map(|m| m.to).collect();
    assert_eq!(pushes, vec![28]);
}

#[test]
fn test_black_generation_on_white_turn() {
    let board = Board::startpos();
    let mut list = MoveList::new();
    generate_moves(&board, Color::Black, GenMode::All, &mut list);
    assert_eq!(list.len(), 20);
    assert!(list.ordered().all(|m| m.piece.color() == Color::Black));
}
