use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

/// Flips ranks, swaps piece colors and the side to move.
fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let placement: Vec<String> = fields[0]
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
                .collect()
        })
        .collect();
    let side = if fields[1] == "w" { "b" } else { "w" };
    format!("{} {} - - 0 1", placement.join("/"), side)
}

#[test]
fn test_king_value() {
    assert_eq!(KING, 51_058);
    assert_eq!(piece_value(PieceKind::King), 0);
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    assert_eq!(evaluate(&b, Color::White), 0);
    assert_eq!(evaluate(&b, Color::Black), 0);
    assert_eq!(material(&b, Color::White), 8 * PAWN + 2 * ROOK + 2 * KNIGHT + 2 * BISHOP + QUEEN);
}

#[test]
fn test_pawns_gain_value_when_advancing() {
    let b = board("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
    assert_eq!(material(&b, Color::White), PAWN + 2);
    assert_eq!(material(&b, Color::Black), PAWN + 2);

    let b = board("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(material(&b, Color::White), PAWN + 5);
}

#[test]
fn test_score_is_relative_to_side_to_move() {
    // white king cornered on a1, black king central on d5
    let b = board("8/8/8/3k4/8/8/8/K7 w - - 0 1");
    assert_eq!(evaluate(&b, Color::White), -9);
    assert_eq!(evaluate(&b, Color::Black), -9);

    let b = board("8/8/8/3k4/8/8/8/K7 b - - 0 1");
    assert_eq!(evaluate(&b, Color::White), 9);
}

#[test]
fn test_lone_king_bonus_needs_less_than_a_rook() {
    let b = board("8/8/8/3k4/8/8/8/R6K w - - 0 1");
    // only black gets the bonus: 3 for centralization, 8 for distance
    assert_eq!(evaluate(&b, Color::White), ROOK - 11);
}

#[test]
fn test_material_symmetry_under_mirroring() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "5k2/5p2/8/8/8/8/1PPPPPP1/4K3 w - - 0 1",
        "8/8/3K4/8/3k4/5r2/8/8 b - - 0 1",
    ];
    for fen in fens {
        let original = board(fen);
        let mirrored = board(&mirror_fen(fen));
        assert_eq!(
            evaluate(&original, original.side_to_move()),
            evaluate(&mirrored, mirrored.side_to_move()),
            "mirror of {fen}"
        );
        assert_eq!(
            material(&original, Color::White),
            material(&mirrored, Color::Black),
            "material of {fen}"
        );
    }
}
