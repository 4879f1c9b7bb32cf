#![forbid(unsafe_code)]

//! Core: operation model, instrumented sorting algorithms, and metrics.
//!
//! # Role in sortrace
//! `sortrace-core` is the trace engine. It executes one of nine classic
//! sorting algorithms against a private working copy of the caller's array
//! and records every comparison, exchange, write, and highlight as an
//! [`Operation`]. The resulting [`Trace`] is enough to rebuild every
//! intermediate array state without running the algorithm again.
//!
//! # Primary responsibilities
//! - **Operation**: tagged atomic actions and the single [`apply`] used by
//!   both generation and replay.
//! - **Generator**: [`generate`] by name, or [`generate_trace`] /
//!   [`generate_with_metrics`] for a known [`Algorithm`].
//! - **Metrics**: comparison/swap counters and generation wall-clock time.
//! - **Input presets**: reproducible arrays from a seed.
//!
//! # How it fits in the system
//! The playback runtime (`sortrace-runtime`) consumes a finished [`Trace`]
//! and walks it forward or backward. Nothing in this crate renders, blocks,
//! or touches the filesystem.

pub mod algorithm;
pub mod error;
pub mod generator;
pub mod input;
pub mod metrics;
pub mod operation;
pub mod trace;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use error::{GenerateError, Result};
pub use generator::{generate, generate_named_with_metrics, generate_trace, generate_with_metrics};
pub use input::{InputPreset, InputSpec};
pub use metrics::Metrics;
pub use operation::{Operation, OperationKind, apply, apply_all};
pub use trace::{OperationCounts, Trace};
