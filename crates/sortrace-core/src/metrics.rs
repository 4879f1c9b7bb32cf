#![forbid(unsafe_code)]

//! Comparison/swap counters and wall-clock timing for trace generation.
//!
//! Counters are fed at generation time, once per recorded operation, so
//! scrubbing back and forth through a trace during playback never inflates
//! them. A [`Metrics`] value belongs to whoever calls the generator; the
//! trace itself carries no counters.

use web_time::{Duration, Instant};

use crate::operation::Operation;

/// Counters for one generator invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metrics {
    comparisons: u64,
    swaps: u64,
    elapsed: Duration,
    #[cfg_attr(feature = "serde", serde(skip))]
    started: Option<Instant>,
}

impl Metrics {
    /// Create zeroed metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and discard any running timer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start the wall-clock timer.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop the wall-clock timer, adding the span since [`start`](Self::start)
    /// to `elapsed`. No-op if the timer is not running.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = self.elapsed.saturating_add(started.elapsed());
        }
    }

    /// Count one recorded operation.
    #[inline]
    pub fn record(&mut self, op: &Operation) {
        match op {
            Operation::Compare { .. } => self.comparisons += 1,
            Operation::Swap { .. } => self.swaps += 1,
            Operation::Set { .. } | Operation::Highlight { .. } => {}
        }
    }

    /// Number of `Compare` operations recorded.
    #[inline]
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of `Swap` operations recorded.
    #[inline]
    #[must_use]
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Wall-clock duration of generation.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether the timer is currently running.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}
