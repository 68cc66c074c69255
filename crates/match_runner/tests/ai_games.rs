//! Engine-versus-engine games through the driver
//!
//! Games are short and seeded, so they are reproducible and every recorded
//! position can be replayed from the start position.

use chess_core::{parse_move, Board, Color, Player};
use classical_engine::AiPlayer;
use match_runner::{GameConfig, GameOutcome, GameRecord, GameRunner, PlayerConfig};

fn replay(record: &GameRecord) -> Board {
    let mut board = Board::from_fen(&record.start_fen).unwrap();
    for (i, ply) in record.moves.iter().enumerate() {
        let mv = parse_move(&board, &ply.mv)
            .unwrap_or_else(|| panic!("ply {} ({}) does not replay", i + 1, ply.mv));
        board.apply(&mv).unwrap();
        assert_eq!(board.to_fen(), ply.fen, "position after ply {}", i + 1);
    }
    board
}

#[test]
fn seeded_games_are_reproducible() {
    let play = || {
        let mut white = AiPlayer::new(Color::White, 2).with_seed(5);
        let mut black = AiPlayer::new(Color::Black, 1).with_seed(6);
        GameRunner::new(Board::startpos())
            .with_max_plies(24)
            .play(&mut white, &mut black)
            .unwrap()
    };
    let first = play();
    let second = play();
    assert_eq!(first, second);
    assert!(first.moves.iter().all(|ply| ply.evaluation.is_some()));

    let board = replay(&first);
    assert_eq!(board.to_fen(), first.final_fen());
}

#[test]
fn engine_converts_a_won_endgame() {
    // king and queen against a bare king
    let config = GameConfig::from_toml_str(
        r#"
        start_fen = "8/8/8/3k4/8/8/8/3QK3 w - - 0 1"
        max_plies = 80

        [white]
        kind = "ai"
        depth = 3
        seed = 1

        [black]
        kind = "ai"
        depth = 1
        seed = 2
        "#,
    )
    .unwrap();

    let mut white = config.white.build(Color::White);
    let mut black = config.black.build(Color::Black);
    let record = GameRunner::from_config(&config)
        .unwrap()
        .play(white.as_mut(), black.as_mut())
        .unwrap();

    assert_ne!(record.outcome.winner(), Some(match_runner::Side::Black));
    assert!(!matches!(record.outcome, GameOutcome::Resignation { .. }));
    replay(&record);
}

#[test]
fn config_players_report_names_in_record() {
    let config = GameConfig {
        max_plies: 2,
        white: PlayerConfig::ai(1),
        black: PlayerConfig::ai(1),
        ..GameConfig::default()
    };
    let mut white = config.white.build(Color::White);
    let mut black = config.black.build(Color::Black);
    let record = GameRunner::from_config(&config)
        .unwrap()
        .play(white.as_mut(), black.as_mut())
        .unwrap();

    assert_eq!(record.white, white.name());
    assert_eq!(record.outcome, GameOutcome::PlyLimit);

    let json = serde_json::to_string(&record).unwrap();
    let decoded: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);
}
