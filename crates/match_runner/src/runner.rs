//! Plays one game between two players

use chess_core::{move_to_string, render, Board, Color, Move, Player, Status};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::RunnerError;
use crate::results::{GameOutcome, GameRecord, PlyRecord};

/// Owns the canonical board of a game.
#[derive(Debug, Clone)]
pub struct GameRunner {
    board: Board,
    max_plies: u32,
}

impl GameRunner {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            max_plies: GameConfig::default().max_plies,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, RunnerError> {
        Ok(Self::new(config.start_board()?).with_max_plies(config.max_plies))
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until checkmate, stalemate, the fifty-move rule, a player
    /// without a move, or the ply cap.
    ///
    /// Each move is validated against the board before it is applied, and
    /// the cached piece counts are cross-checked by a full recount.
    pub fn play(
        &mut self,
        white: &mut dyn Player,
        black: &mut dyn Player,
    ) -> Result<GameRecord, RunnerError> {
        check_seat(white, Color::White)?;
        check_seat(black, Color::Black)?;

        white.prepare(&self.board);
        black.prepare(&self.board);

        let mut record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            start_fen: self.board.to_fen(),
            moves: Vec::new(),
            outcome: GameOutcome::PlyLimit,
        };

        let (mut current, mut other): (&mut dyn Player, &mut dyn Player) =
            match self.board.side_to_move() {
                Color::White => (white, black),
                Color::Black => (black, white),
            };
        let mut status = self.board.status(current.color());

        record.outcome = loop {
            let mover = current.color();
            match status {
                Status::Checkmate => {
                    break GameOutcome::Checkmate {
                        winner: mover.other().into(),
                    }
                }
                Status::Stalemate => break GameOutcome::Stalemate,
                Status::Draw => break GameOutcome::FiftyMoveDraw,
                Status::Normal | Status::InCheck => {}
            }
            if record.moves.len() as u32 >= self.max_plies {
                break GameOutcome::PlyLimit;
            }

            let Some(choice) = current.get_move(&self.board) else {
                info!(player = current.name(), "no move offered, resigning");
                break GameOutcome::Resignation {
                    winner: mover.other().into(),
                };
            };

            let mut mv = choice.mv;
            if !self.board.is_valid_move(mover, &mut mv) {
                return Err(RunnerError::IllegalMove {
                    player: current.name().to_string(),
                    mv: move_to_string(&choice.mv),
                });
            }
            self.board.apply(&mv)?;
            other.show_move(&self.board, &mv);

            let fen = self.board.to_fen();
            info!(
                ply = record.moves.len() + 1,
                player = current.name(),
                mv = %move_to_string(&mv),
                evaluation = ?choice.evaluation,
                fen = %fen,
                "move played"
            );
            debug!("\n{}", render(&self.board, Some(&mv)));
            record.moves.push(PlyRecord {
                mv: move_to_string(&mv),
                fen,
                evaluation: choice.evaluation,
            });

            status = self.board.status(other.color());
            check_piece_count(&self.board, &mv)?;
            std::mem::swap(&mut current, &mut other);
        };

        info!(outcome = %record.outcome, plies = record.moves.len(), "game over");
        Ok(record)
    }
}

fn check_seat(player: &dyn Player, seat: Color) -> Result<(), RunnerError> {
    if player.color() == seat {
        Ok(())
    } else {
        Err(RunnerError::SeatMismatch {
            player: player.name().to_string(),
            seat,
            actual: player.color(),
        })
    }
}

fn check_piece_count(board: &Board, mv: &Move) -> Result<(), RunnerError> {
    let cached = board.total_pieces();
    let mut recounted = board.clone();
    recounted.recount_pieces();
    let actual = recounted.total_pieces();
    if cached == actual {
        Ok(())
    } else {
        Err(RunnerError::PieceCount {
            mv: move_to_string(mv),
            cached,
            actual,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
