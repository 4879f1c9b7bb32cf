#![forbid(unsafe_code)]

//! sortrace Runtime
//!
//! Stateful playback over a finished [`Trace`](sortrace_core::Trace).
//!
//! # Key Components
//!
//! - [`PlaybackController`] - Cursor with step, seek, and paced auto-play
//! - [`PlaybackState`] - `Idle` / `Playing` / `Paused` / `Completed`
//! - [`PlaybackEvent`] - Notifications delivered to subscribed listeners
//! - [`PlaybackConfig`] - Pacing tunables, loadable from TOML or JSON with
//!   the `config` feature
//!
//! # How it fits in the system
//! `sortrace-core` produces traces; this crate only consumes them. Auto-play
//! never sleeps: the host calls [`PlaybackController::advance`] with elapsed
//! time from its own clock (a frame loop, a timer, or a virtual clock in
//! tests) and receives the operations that became due.

pub mod config;
pub mod playback;

pub use config::{ConfigError, PlaybackConfig};
pub use playback::{PlaybackController, PlaybackEvent, PlaybackState, StepDirection};
