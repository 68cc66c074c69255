use super::*;

#[test]
fn test_full_config() {
    let config = GameConfig::from_toml_str(
        r#"
        start_fen = "5k2/5p2/8/8/8/8/1PPPPPP1/4K3 w - - 2 3"
        max_plies = 60
        output = "games/last.json"

        [white]
        kind = "ai"
        depth = 4
        move_time_ms = 250
        seed = 9

        [black]
        kind = "human"
        "#,
    )
    .unwrap();

    assert_eq!(config.max_plies, 60);
    assert_eq!(config.output, Some(PathBuf::from("games/last.json")));
    assert_eq!(
        config.white,
        PlayerConfig::Ai {
            depth: 4,
            quiescence_limit: DEFAULT_QUIESCENCE_LIMIT,
            move_time_ms: Some(250),
            seed: Some(9),
        }
    );
    assert!(config.player(Color::Black).is_human());
    assert_eq!(config.start_board().unwrap().piece_count(Color::White), 7);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = GameConfig::from_toml_str("max_plies = 10").unwrap();
    assert_eq!(config.white, PlayerConfig::ai(2));
    assert_eq!(config.black, PlayerConfig::ai(3));
    assert_eq!(config.start_board().unwrap(), Board::startpos());

    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn test_bad_config_is_reported() {
    let err = GameConfig::from_toml_str("[white]\nkind = \"robot\"").unwrap_err();
    assert!(matches!(err, RunnerError::Config(_)));

    let config = GameConfig {
        start_fen: Some("8/8/8/8/8/8/8/8 w - - 0 1".to_string()),
        ..GameConfig::default()
    };
    assert!(matches!(config.start_board(), Err(RunnerError::Fen(_))));

    let err = GameConfig::load(Path::new("/nonexistent/game.toml")).unwrap_err();
    assert!(matches!(err, RunnerError::Io { .. }));
}

#[test]
fn test_built_ai_keeps_its_seat() {
    let player = PlayerConfig::ai(1).build(Color::Black);
    assert_eq!(player.color(), Color::Black);
    assert_eq!(player.name(), "Classical (depth 1)");
}
