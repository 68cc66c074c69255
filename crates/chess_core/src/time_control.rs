//! Search limits and cooperative cancellation.
//!
//! The search itself never suspends. A host that wants to bound thinking
//! time hands in a [`TimeControl`]; the search polls it at node boundaries
//! and unwinds with the best result it has completed so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Default number of plies a capture/check sequence may extend past depth 0.
pub const DEFAULT_QUIESCENCE_LIMIT: i32 = 6;

/// Fixed-depth search limits with an optional wall-clock budget.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Nominal search depth in plies (half-moves)
    pub depth: u8,
    /// How far below depth 0 noisy lines are still followed
    pub quiescence_limit: i32,
    /// Maximum time allowed for this move (None = no limit)
    pub move_time: Option<Duration>,
    /// Shared stop flag and clock
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            quiescence_limit: DEFAULT_QUIESCENCE_LIMIT,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
            ..Self::depth(depth)
        }
    }

    pub fn with_quiescence_limit(mut self, limit: i32) -> Self {
        self.quiescence_limit = limit;
        self
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Stop flag plus clock, cheap to clone and share with another thread
/// that may call [`TimeControl::stop`].
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    started_at: Arc<Mutex<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// Nodes between two clock reads.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            started_at: Arc::new(Mutex::new(None)),
            time_limit,
            check_interval: 1024,
        }
    }

    /// Start (or restart) the clock and clear the stop flag.
    pub fn start(&self) {
        *self.started_at.lock().unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag once the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
            && self.started().is_some()
        {
            self.stop();
            return true;
        }
        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    /// Polls the clock on interval nodes; returns true if the search must stop.
    pub fn poll(&self, nodes: u64) -> bool {
        if self.should_check_time(nodes) {
            self.check_time()
        } else {
            self.is_stopped()
        }
    }

    fn started(&self) -> Option<Instant> {
        *self.started_at.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn elapsed(&self) -> Duration {
        self.started()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining budget (None if there is no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
