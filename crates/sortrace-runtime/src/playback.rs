#![forbid(unsafe_code)]

//! Playback controller: a cursor over a [`Trace`].
//!
//! A [`PlaybackController`] owns a trace and a derived array equal to the
//! trace input with the first `position` operations applied. It supports
//! single steps in both directions, direct seeks, and non-blocking
//! variable-speed auto-play driven by [`advance`](PlaybackController::advance).
//!
//! # State machine
//!
//! ```text
//!            play()              pause()
//!   Idle ───────────► Playing ───────────► Paused
//!                        ▲  │  ◄───────────  │
//!                        │  │    resume()    │
//!                        │  │ position == len│
//!       play() (rewind)  │  ▼                │
//!                     Completed              │
//!                                            │
//!   step_forward / step_backward / seek ─────┘  (from any state, when the cursor moves)
//!   reset() ──► Idle, position 0                (from any state)
//! ```
//!
//! # Invariants
//!
//! 1. `0 <= position <= trace.len()`.
//! 2. `current_array() == trace.state_at(position)` after every call.
//! 3. `Completed` is only entered from `Playing`, when `position == len`.
//! 4. Manual navigation (`step_*`, `seek`) that moves the cursor leaves
//!    the controller `Paused`.
//! 5. No method blocks; pause is a state flag.
//!
//! # Undo
//!
//! `Swap` is its own inverse. For `Set`, the value it overwrote is cached
//! once at construction (one slot per operation), so stepping backward is
//! O(1) and byte-identical to forward replay.
//!
//! # Failure Modes
//!
//! - Stepping past either end: returns `None`, state unchanged.
//! - Seek out of range: clamped to `[0, len]`.
//! - Non-finite or out-of-range speed: clamped by [`PlaybackConfig`].

use std::fmt;

use sortrace_core::{Operation, Trace, apply};
use web_time::Duration;

use crate::config::{ConfigError, PlaybackConfig};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Playback state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// At the start, not yet played.
    Idle,
    /// Auto-play is running; `advance` applies operations.
    Playing,
    /// Stopped mid-trace; can be resumed.
    Paused,
    /// Auto-play reached the end of the trace.
    Completed,
}

impl PlaybackState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Forward,
    Backward,
}

/// Notification delivered to listeners registered with
/// [`PlaybackController::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// One operation was applied (forward) or undone (backward).
    Stepped {
        direction: StepDirection,
        operation: Operation,
        position: usize,
    },
    /// The cursor jumped directly.
    Seeked { from: usize, to: usize },
    /// The state machine changed state.
    StateChanged {
        from: PlaybackState,
        to: PlaybackState,
    },
}

type Listener = Box<dyn FnMut(&PlaybackEvent) + Send>;

/// Stateful cursor over one trace.
pub struct PlaybackController {
    trace: Trace,
    /// Value each `Set` overwrote, indexed by operation; `None` otherwise.
    overwritten: Vec<Option<i32>>,
    array: Vec<i32>,
    position: usize,
    state: PlaybackState,
    speed: f64,
    config: PlaybackConfig,
    /// Virtual time accumulated by `advance` and not yet spent on a step.
    pending: Duration,
    listeners: Vec<Listener>,
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("algorithm", &self.trace.algorithm())
            .field("len", &self.trace.len())
            .field("position", &self.position)
            .field("state", &self.state)
            .field("speed", &self.speed)
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl PlaybackController {
    /// Create a controller at position 0 with the default configuration.
    #[must_use]
    pub fn new(trace: Trace) -> Self {
        Self::build(trace, PlaybackConfig::default())
    }

    /// Create a controller at position 0 with `config`.
    ///
    /// Fails with [`ConfigError::Validation`] when `config` is out of range;
    /// a zero step cap, for one, would leave auto-play stuck in `Playing`.
    pub fn with_config(trace: Trace, config: PlaybackConfig) -> Result<Self, ConfigError> {
        Ok(Self::build(trace, config.checked()?))
    }

    fn build(trace: Trace, config: PlaybackConfig) -> Self {
        let overwritten = overwritten_values(&trace);
        let array = trace.input().to_vec();
        let speed = config.clamp_speed(config.default_speed);
        Self {
            trace,
            overwritten,
            array,
            position: 0,
            state: PlaybackState::Idle,
            speed,
            config,
            pending: Duration::ZERO,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for steps, seeks, and state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&PlaybackEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Give the trace back, discarding playback state.
    #[must_use]
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

/// Fold the trace once, recording what each `Set` overwrites.
fn overwritten_values(trace: &Trace) -> Vec<Option<i32>> {
    let mut array = trace.input().to_vec();
    trace
        .operations()
        .iter()
        .map(|op| {
            let prior = match *op {
                Operation::Set { index, .. } => Some(array[index]),
                _ => None,
            };
            apply(&mut array, op);
            prior
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Playback control
// ---------------------------------------------------------------------------

impl PlaybackController {
    /// Start auto-play.
    ///
    /// From `Idle` or `Paused`, plays from the current position. From
    /// `Completed`, rewinds to the start first. No-op while `Playing`.
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Playing => {}
            PlaybackState::Completed => {
                self.rewind();
                self.start_playing();
            }
            PlaybackState::Idle | PlaybackState::Paused => self.start_playing(),
        }
    }

    /// Pause auto-play. No-op if not playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.transition(PlaybackState::Paused);
        }
    }

    /// Resume from pause. No-op if not paused.
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.start_playing();
        }
    }

    /// Return to position 0 and `Idle`, from any state.
    pub fn reset(&mut self) {
        self.rewind();
        self.transition(PlaybackState::Idle);
    }

    /// Apply the next operation. Returns it, or `None` at the end.
    pub fn step_forward(&mut self) -> Option<Operation> {
        let op = self.apply_forward()?;
        self.emit(&PlaybackEvent::Stepped {
            direction: StepDirection::Forward,
            operation: op,
            position: self.position,
        });
        self.hold();
        Some(op)
    }

    /// Undo the previous operation. Returns it, or `None` at the start.
    pub fn step_backward(&mut self) -> Option<Operation> {
        let op = self.apply_backward()?;
        self.emit(&PlaybackEvent::Stepped {
            direction: StepDirection::Backward,
            operation: op,
            position: self.position,
        });
        self.hold();
        Some(op)
    }

    /// Jump to `target`, clamped to `[0, len]`.
    ///
    /// Walks from whichever of the current position or the start is closer.
    /// A seek that lands where the cursor already is changes nothing.
    pub fn seek(&mut self, target: usize) {
        let from = self.position;
        let target = target.min(self.trace.len());
        if target == from {
            return;
        }

        if target >= from {
            while self.position < target {
                self.apply_forward();
            }
        } else if target < from - target {
            self.array.clear();
            self.array.extend_from_slice(self.trace.input());
            self.position = 0;
            while self.position < target {
                self.apply_forward();
            }
        } else {
            while self.position > target {
                self.apply_backward();
            }
        }

        tracing::debug!(playback_event = "seek", from, to = target);
        self.emit(&PlaybackEvent::Seeked { from, to: target });
        self.hold();
    }

    /// Set the speed multiplier. Clamped to the configured bounds.
    pub fn set_speed(&mut self, multiplier: f64) {
        let clamped = self.config.clamp_speed(multiplier);
        if clamped != multiplier {
            tracing::warn!(
                requested = multiplier,
                applied = clamped,
                "playback speed clamped"
            );
        }
        self.speed = clamped;
    }

    /// Advance auto-play by `dt` of wall-clock time.
    ///
    /// While `Playing`, applies one operation per elapsed
    /// [`step_delay`](Self::step_delay), up to `max_steps_per_advance`, and
    /// returns them in order. Enters `Completed` on reaching the end.
    /// Returns nothing in any other state.
    pub fn advance(&mut self, dt: Duration) -> Vec<Operation> {
        if self.state != PlaybackState::Playing {
            return Vec::new();
        }

        let delay = self.step_delay();
        let cap = self.config.max_steps_per_advance;
        self.pending = self.pending.saturating_add(dt);

        let mut applied = Vec::new();
        while applied.len() < cap && self.pending >= delay {
            let Some(op) = self.apply_forward() else {
                break;
            };
            self.pending = self.pending.saturating_sub(delay);
            self.emit(&PlaybackEvent::Stepped {
                direction: StepDirection::Forward,
                operation: op,
                position: self.position,
            });
            applied.push(op);
        }

        if applied.len() == cap {
            // Collapse backlog so one huge dt cannot queue unbounded work.
            self.pending = self.pending.min(delay);
        }
        if self.position == self.trace.len() {
            self.pending = Duration::ZERO;
            self.transition(PlaybackState::Completed);
        }

        tracing::trace!(
            playback_event = "advance",
            dt_us = dt.as_micros() as u64,
            applied = applied.len(),
            position = self.position,
        );
        applied
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl PlaybackController {
    /// The derived array at the current position.
    #[inline]
    #[must_use]
    pub fn current_array(&self) -> &[i32] {
        &self.array
    }

    /// Number of operations applied so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of operations in the trace.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Whether the trace has no operations.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Current playback state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current speed multiplier.
    #[inline]
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Effective inter-step delay: base delay divided by speed.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        let secs = self.config.base_step_delay().as_secs_f64() / self.speed;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Position as a fraction of the trace, in `[0.0, 1.0]`.
    ///
    /// An empty trace reports 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.trace.is_empty() {
            return 1.0;
        }
        (self.position as f64 / self.trace.len() as f64) as f32
    }

    /// The operation that produced the current state, if any.
    #[must_use]
    pub fn current_operation(&self) -> Option<Operation> {
        self.position
            .checked_sub(1)
            .map(|i| self.trace.operations()[i])
    }

    /// The operation the next forward step would apply, if any.
    #[must_use]
    pub fn next_operation(&self) -> Option<Operation> {
        self.trace.operations().get(self.position).copied()
    }

    /// The trace being played.
    #[inline]
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

impl PlaybackController {
    fn apply_forward(&mut self) -> Option<Operation> {
        let op = *self.trace.operations().get(self.position)?;
        apply(&mut self.array, &op);
        self.position += 1;
        Some(op)
    }

    fn apply_backward(&mut self) -> Option<Operation> {
        let index = self.position.checked_sub(1)?;
        let op = self.trace.operations()[index];
        match op {
            Operation::Swap { i, j } => self.array.swap(i, j),
            Operation::Set { index: cell, .. } => {
                if let Some(prior) = self.overwritten[index] {
                    self.array[cell] = prior;
                }
            }
            Operation::Compare { .. } | Operation::Highlight { .. } => {}
        }
        self.position = index;
        Some(op)
    }

    fn rewind(&mut self) {
        self.array.clear();
        self.array.extend_from_slice(self.trace.input());
        self.position = 0;
        self.pending = Duration::ZERO;
    }

    fn start_playing(&mut self) {
        self.pending = Duration::ZERO;
        self.transition(PlaybackState::Playing);
        if self.position == self.trace.len() {
            self.transition(PlaybackState::Completed);
        }
    }

    /// Manual navigation parks the controller in `Paused`.
    fn hold(&mut self) {
        self.pending = Duration::ZERO;
        self.transition(PlaybackState::Paused);
    }

    fn transition(&mut self, to: PlaybackState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        tracing::debug!(
            playback_event = to.as_str(),
            from = from.as_str(),
            position = self.position,
            len = self.trace.len(),
        );
        self.emit(&PlaybackEvent::StateChanged { from, to });
    }

    fn emit(&mut self, event: &PlaybackEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
