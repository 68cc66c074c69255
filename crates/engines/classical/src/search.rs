//! Negamax search with alpha-beta pruning and a quiescence extension

use std::time::{Duration, Instant};

use chess_core::{
    generate_moves, Board, BoardError, GenMode, Move, MoveList, SearchLimits, FIFTY_MOVE_LIMIT,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::{evaluate, WIN};

/// Window bound wider than any reachable score.
const INFINITY: i32 = 1_000_000;

/// Value of a searched node, from the perspective of the side to move there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeValue {
    Evaluated(i32),
    /// No legal move while in check.
    Checkmate { halfmove_clock: u32 },
    /// No legal move, king not attacked.
    Stalemate,
}

impl NodeValue {
    /// Signed score. A mate scores just above `-WIN`, more so the later it
    /// happens, so the winner prefers the quickest line and the loser the
    /// longest.
    pub fn score(self) -> i32 {
        match self {
            NodeValue::Evaluated(score) => score,
            NodeValue::Checkmate { halfmove_clock } => mate_floor(halfmove_clock),
            NodeValue::Stalemate => 0,
        }
    }
}

/// Losing score for a side mated at `halfmove_clock`. The clock only matters
/// up to the fifty-move limit; past it every line is drawn anyway.
fn mate_floor(halfmove_clock: u32) -> i32 {
    -WIN + halfmove_clock.min(FIFTY_MOVE_LIMIT) as i32
}

/// Receives instrumentation events from a running search.
pub trait SearchRecorder {
    fn node(&mut self) {}
    fn evaluation(&mut self, _elapsed: Duration) {}
}

/// Plain counters, enough for a per-move log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerfCounters {
    pub nodes: u64,
    pub evaluations: u64,
    pub eval_time: Duration,
}

impl PerfCounters {
    /// Mean wall time of one static evaluation.
    pub fn mean_eval_time(&self) -> Option<Duration> {
        if self.evaluations == 0 {
            return None;
        }
        let nanos = self.eval_time.as_nanos() / u128::from(self.evaluations);
        Some(Duration::from_nanos(nanos as u64))
    }
}

impl SearchRecorder for PerfCounters {
    fn node(&mut self) {
        self.nodes += 1;
    }

    fn evaluation(&mut self, elapsed: Duration) {
        self.evaluations += 1;
        self.eval_time += elapsed;
    }
}

/// Per-search state passed down the recursion.
pub struct SearchContext<'a> {
    pub limits: SearchLimits,
    nodes: u64,
    recorder: Option<&'a mut dyn SearchRecorder>,
    stopped: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            nodes: 0,
            recorder: None,
            stopped: false,
        }
    }

    pub fn with_recorder(mut self, recorder: &'a mut dyn SearchRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Counts a node and polls the time control.
    fn visit(&mut self) {
        self.nodes += 1;
        if let Some(recorder) = self.recorder.as_deref_mut() {
            recorder.node();
        }
        if !self.stopped && self.limits.time_control.poll(self.nodes) {
            self.stopped = true;
        }
    }

    fn evaluate(&mut self, board: &Board) -> i32 {
        let side = board.side_to_move();
        match self.recorder.as_deref_mut() {
            Some(recorder) => {
                let start = Instant::now();
                let score = evaluate(board, side);
                recorder.evaluation(start.elapsed());
                score
            }
            None => evaluate(board, side),
        }
    }
}

/// Recursive negamax over pseudo-legal moves, captures first.
///
/// `quiescent` marks a node reached by a capture or a check; such nodes keep
/// being searched below depth 0, down to `-limits.quiescence_limit`. Below
/// depth 0 a side that is not in check may stand pat on the static
/// evaluation and only tries captures.
pub fn negamax(
    board: &mut Board,
    ctx: &mut SearchContext,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    quiescent: bool,
) -> Result<NodeValue, BoardError> {
    ctx.visit();

    if depth <= 0 && (!quiescent || depth <= -ctx.limits.quiescence_limit) {
        return Ok(NodeValue::Evaluated(ctx.evaluate(board)));
    }

    let mover = board.side_to_move();
    let in_check = board.in_check(mover);
    let captures_only = depth <= 0 && !in_check;

    let mut best = mate_floor(board.halfmove_clock());
    if captures_only {
        let stand_pat = ctx.evaluate(board);
        if stand_pat > beta {
            return Ok(NodeValue::Evaluated(stand_pat));
        }
        best = stand_pat;
        alpha = alpha.max(stand_pat);
    }

    let mode = if captures_only {
        GenMode::CapturesOnly
    } else {
        GenMode::All
    };
    let mut list = MoveList::new();
    generate_moves(board, mover, mode, &mut list);

    let mut any_legal = false;
    for mv in list.ordered() {
        if alpha > beta || ctx.is_stopped() {
            break;
        }

        board.apply(mv)?;
        // adjacent kings also fail in_check, this is just the fast path
        let score = if board.kings_adjacent() || board.in_check(mover) {
            None
        } else {
            any_legal = true;
            let noisy = mv.is_capture() || board.in_check(mover.other());
            if board.halfmove_clock() >= FIFTY_MOVE_LIMIT {
                Some(0)
            } else {
                let child = negamax(board, ctx, depth - 1, -beta, -alpha, noisy)?;
                Some(-child.score())
            }
        };
        board.undo(mv)?;

        if let Some(score) = score {
            if score > best {
                best = score;
                alpha = alpha.max(score);
            }
        }
    }

    if !any_legal && !captures_only && !ctx.is_stopped() {
        return Ok(if in_check {
            NodeValue::Checkmate {
                halfmove_clock: board.halfmove_clock(),
            }
        } else {
            NodeValue::Stalemate
        });
    }
    Ok(NodeValue::Evaluated(best))
}

/// Every root move sharing the best score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootOutcome {
    pub candidates: Vec<Move>,
    /// Score of the candidates, `None` when there was no legal move
    pub score: Option<i32>,
    /// True if the time control cut the search short
    pub stopped: bool,
}

/// Searches each legal root move with a full window and keeps all maxima.
///
/// A move whose subtree was interrupted by the time control is dropped
/// unless no root move finished at all.
pub fn root_candidates(board: &Board, ctx: &mut SearchContext) -> Result<RootOutcome, BoardError> {
    let mut board = board.clone();
    let mover = board.side_to_move();
    let depth = i32::from(ctx.limits.depth) - 1;

    let mut list = MoveList::new();
    generate_moves(&board, mover, GenMode::All, &mut list);

    let mut outcome = RootOutcome::default();
    for mv in list.ordered() {
        if ctx.is_stopped() {
            break;
        }

        board.apply(mv)?;
        let score = if board.in_check(mover) {
            None
        } else {
            if board.halfmove_clock() >= FIFTY_MOVE_LIMIT {
                Some(0)
            } else {
                let noisy = mv.is_capture() || board.in_check(mover.other());
                let child = negamax(&mut board, ctx, depth, -INFINITY, INFINITY, noisy)?;
                Some(-child.score())
            }
        };
        board.undo(mv)?;

        let Some(score) = score else {
            continue;
        };
        if ctx.is_stopped() {
            if outcome.candidates.is_empty() {
                // nothing finished in time, keep the interrupted move
                outcome.score = Some(score);
                outcome.candidates.push(*mv);
            }
            break;
        }
        match outcome.score {
            Some(best) if score < best => {}
            Some(best) if score == best => outcome.candidates.push(*mv),
            _ => {
                outcome.score = Some(score);
                outcome.candidates.clear();
                outcome.candidates.push(*mv);
            }
        }
    }

    outcome.stopped = ctx.is_stopped();
    Ok(outcome)
}

/// Picks uniformly among the best root moves.
///
/// # Returns
/// The move and its score, or `None` if the side to move has no legal move.
pub fn pick_move<R: Rng + ?Sized>(
    board: &Board,
    ctx: &mut SearchContext,
    rng: &mut R,
) -> Result<Option<(Move, i32)>, BoardError> {
    let outcome = root_candidates(board, ctx)?;
    let Some(score) = outcome.score else {
        return Ok(None);
    };
    Ok(outcome.candidates.choose(rng).map(|mv| (*mv, score)))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
