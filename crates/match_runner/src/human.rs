//! Console player

use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use chess_core::{move_to_string, parse_move, render, Board, Color, Move, Player, PlayerChoice, Status};
use tracing::{info, warn};

/// Reads coordinate moves (`e2e4`) line by line; `quit` resigns.
pub struct HumanPlayer<R, W> {
    color: Color,
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio(color: Color) -> Self {
        Self::new(color, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            name: "Human".to_string(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            warn!(error = %err, "console write failed");
        }
    }

    /// Next non-empty line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) if line.trim().is_empty() => continue,
                Ok(_) => return Some(line.trim().to_string()),
                Err(err) => {
                    warn!(error = %err, "console read failed");
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> Player for HumanPlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&mut self, board: &Board) {
        let view = render(board, None);
        self.say(format_args!("{view}\n"));
    }

    fn get_move(&mut self, board: &Board) -> Option<PlayerChoice> {
        loop {
            self.say(format_args!(">> "));
            let Some(input) = self.read_line() else {
                info!("input closed");
                return None;
            };
            if input.eq_ignore_ascii_case("quit") {
                info!("player quit");
                return None;
            }

            match parse_move(board, &input) {
                Some(mv) => {
                    let mut after = board.clone();
                    if after.apply(&mv).is_ok() {
                        let view = render(&after, Some(&mv));
                        self.say(format_args!("\n{view}\n"));
                    }
                    return Some(PlayerChoice {
                        mv,
                        evaluation: None,
                    });
                }
                None => {
                    warn!(input = %input, "invalid move");
                    self.say(format_args!("Invalid move: {input}\n"));
                }
            }
        }
    }

    fn show_move(&mut self, board: &Board, mv: &Move) {
        let view = render(board, Some(mv));
        self.say(format_args!("\n{view}\nOpponent played {}\n", move_to_string(mv)));
        match board.status(self.color) {
            Status::Checkmate => self.say(format_args!("Checkmate\n")),
            Status::Stalemate => self.say(format_args!("Stalemate\n")),
            Status::Draw => self.say(format_args!("Draw by the fifty-move rule\n")),
            Status::InCheck => self.say(format_args!("Check\n")),
            Status::Normal => {}
        }
    }
}

#[cfg(test)]
#[path = "human_tests.rs"]
mod human_tests;
