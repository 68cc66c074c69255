use super::*;

fn sample() -> GameRecord {
    GameRecord {
        white: "Classical (depth 2)".to_string(),
        black: "Human".to_string(),
        start_fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
        moves: vec![
            PlyRecord {
                mv: "e2e4".to_string(),
                fen: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1".to_string(),
                evaluation: Some(12),
            },
            PlyRecord {
                mv: "e7e5".to_string(),
                fen: "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2".to_string(),
                evaluation: None,
            },
        ],
        outcome: GameOutcome::Resignation { winner: Side::White },
    }
}

#[test]
fn test_outcome_results() {
    assert_eq!(GameOutcome::Checkmate { winner: Side::Black }.result_str(), "0-1");
    assert_eq!(GameOutcome::Resignation { winner: Side::White }.result_str(), "1-0");
    assert_eq!(GameOutcome::Stalemate.result_str(), "1/2-1/2");
    assert_eq!(GameOutcome::PlyLimit.winner(), None);
    assert_eq!(Side::from(Color::Black), Side::Black);
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("match_runner_record_{}.json", std::process::id()));
    let record = sample();
    record.save(&path).unwrap();
    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, record);
}

#[test]
fn test_outcome_json_shape() {
    let json = serde_json::to_string(&GameOutcome::Checkmate { winner: Side::White }).unwrap();
    assert_eq!(json, r#"{"type":"checkmate","winner":"white"}"#);
    let json = serde_json::to_string(&GameOutcome::FiftyMoveDraw).unwrap();
    assert_eq!(json, r#"{"type":"fifty_move_draw"}"#);
}

#[test]
fn test_summary() {
    let record = sample();
    let summary = record.summary();
    assert!(summary.contains("Classical (depth 2) vs Human"));
    assert!(summary.contains("e2e4"));
    assert!(summary.contains("Result: 1-0 (resignation, white wins)"));
    assert_eq!(record.final_fen(), record.moves[1].fen);
}

#[test]
fn test_load_rejects_garbage() {
    let path = std::env::temp_dir().join(format!("match_runner_garbage_{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    let err = GameRecord::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, RunnerError::Record(_)));
}
