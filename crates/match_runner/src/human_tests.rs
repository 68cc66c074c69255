use std::io::Cursor;

use super::*;

fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    HumanPlayer::new(Color::White, Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(player: HumanPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(player.into_output()).unwrap()
}

#[test]
fn test_reprompts_until_a_valid_move() {
    let board = Board::startpos();
    let mut human = player("\nzz\ne2e5\n  E2E4  \n");
    let choice = human.get_move(&board).unwrap();
    assert_eq!(move_to_string(&choice.mv), "e2e4");
    assert_eq!(choice.evaluation, None);

    let text = output(human);
    assert!(text.contains("Invalid move: zz"));
    assert!(text.contains("Invalid move: e2e5"));
    assert_eq!(text.matches(">> ").count(), 3);
}

#[test]
fn test_quit_resigns() {
    let mut human = player("QUIT\ne2e4\n");
    assert_eq!(human.get_move(&Board::startpos()), None);
}

#[test]
fn test_end_of_input_resigns() {
    let mut human = player("a1a1\n");
    assert_eq!(human.get_move(&Board::startpos()), None);
}

#[test]
fn test_show_move_reports_check() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/7r/R3K3 b - - 0 1").unwrap();
    let mv = parse_move(&board, "h2h1").unwrap();
    board.apply(&mv).unwrap();

    let mut human = player("");
    human.show_move(&board, &mv);
    let text = output(human);
    assert!(text.contains("Opponent played h2h1"));
    assert!(text.contains("Check"));
}

#[test]
fn test_prepare_prints_the_board() {
    let mut human = player("");
    human.prepare(&Board::startpos());
    let text = output(human);
    assert!(text.lines().count() >= 9);
    assert!(text.contains('a') && text.contains('h'));
}
