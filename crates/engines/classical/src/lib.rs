//! Classical Chess Engine
//!
//! Negamax with alpha-beta pruning, a capture/check quiescence extension
//! and material evaluation, wrapped as a [`Player`].

pub mod eval;
pub mod search;

use std::time::Duration;

use chess_core::{move_to_string, Board, Color, Player, PlayerChoice, SearchLimits};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use eval::evaluate;
pub use search::{
    negamax, pick_move, root_candidates, NodeValue, PerfCounters, RootOutcome, SearchContext,
    SearchRecorder,
};

/// Search-backed player.
///
/// Every call to `get_move` works on its own copy of the board, so the
/// driver's board is never touched.
#[derive(Debug)]
pub struct AiPlayer {
    color: Color,
    name: String,
    limits: SearchLimits,
    rng: StdRng,
    /// Counters from the most recent search
    last_search: PerfCounters,
}

impl AiPlayer {
    pub fn new(color: Color, depth: u8) -> Self {
        Self::with_limits(color, SearchLimits::depth(depth))
    }

    pub fn with_limits(color: Color, limits: SearchLimits) -> Self {
        Self {
            color,
            name: format!("Classical (depth {})", limits.depth),
            limits,
            rng: StdRng::from_entropy(),
            last_search: PerfCounters::default(),
        }
    }

    pub fn with_move_time(color: Color, depth: u8, move_time: Duration) -> Self {
        Self::with_limits(color, SearchLimits::depth_and_time(depth, move_time))
    }

    /// Fixes the tie-breaking sequence, for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn last_search(&self) -> &PerfCounters {
        &self.last_search
    }
}

impl Player for AiPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Option<PlayerChoice> {
        let board = board.clone();
        let mut perf = PerfCounters::default();
        self.limits.start();

        let picked = {
            let mut ctx = SearchContext::new(self.limits.clone()).with_recorder(&mut perf);
            pick_move(&board, &mut ctx, &mut self.rng)
        };
        let picked = match picked {
            Ok(picked) => picked,
            Err(err) => {
                tracing::error!(player = %self.name, error = %err, "search failed");
                return None;
            }
        };

        let elapsed = self.limits.time_control.elapsed();
        tracing::debug!(
            player = %self.name,
            nodes = perf.nodes,
            evaluations = perf.evaluations,
            mean_eval = ?perf.mean_eval_time(),
            elapsed = ?elapsed,
            stopped = self.limits.should_stop(),
            "search finished"
        );
        self.last_search = perf;

        let (mv, score) = picked?;
        tracing::info!(player = %self.name, mv = %move_to_string(&mv), score, "move chosen");
        Some(PlayerChoice {
            mv,
            evaluation: Some(score),
        })
    }
}
