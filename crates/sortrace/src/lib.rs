#![forbid(unsafe_code)]

//! sortrace public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the core and runtime crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use sortrace::prelude::*;
//!
//! let trace = sortrace::generate("Quick Sort", &[5, 3, 8, 1])?;
//! assert_eq!(trace.final_array(), &[1, 3, 5, 8]);
//!
//! let mut player = PlaybackController::new(trace);
//! player.seek(player.len() / 2);
//! player.step_backward();
//! # Ok::<(), sortrace::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use sortrace_core::{
    Algorithm, AlgorithmInfo, GenerateError, InputPreset, InputSpec, Metrics, Operation,
    OperationCounts, OperationKind, Trace, apply, apply_all, generate_trace,
    generate_with_metrics,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use sortrace_runtime::{
    ConfigError, PlaybackConfig, PlaybackController, PlaybackEvent, PlaybackState, StepDirection,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for sortrace.
#[derive(Debug)]
pub enum Error {
    /// Algorithm name did not resolve.
    Generate(GenerateError),
    /// Playback configuration failed to load or validate.
    #[cfg(feature = "runtime")]
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generate(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Config(err) => Some(err),
        }
    }
}

impl From<GenerateError> for Error {
    fn from(err: GenerateError) -> Self {
        Self::Generate(err)
    }
}

#[cfg(feature = "runtime")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for sortrace APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Entry points ---------------------------------------------------------

/// Generate the trace of the algorithm called `name` on `input`.
///
/// Accepts display names ("Merge Sort") and short names ("merge").
pub fn generate(name: &str, input: &[i32]) -> Result<Trace> {
    Ok(sortrace_core::generate(name, input)?)
}

/// Generate a trace and wrap it in a controller positioned at the start.
///
/// Fails on an unknown algorithm name or an out-of-range `config`.
#[cfg(feature = "runtime")]
pub fn player(name: &str, input: &[i32], config: PlaybackConfig) -> Result<PlaybackController> {
    let config = config.checked()?;
    let trace = generate(name, input)?;
    Ok(PlaybackController::with_config(trace, config)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{Algorithm, Error, Metrics, Operation, Result, Trace};

    #[cfg(feature = "runtime")]
    pub use crate::{PlaybackConfig, PlaybackController, PlaybackState};

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use sortrace_core as core;
#[cfg(feature = "runtime")]
pub use sortrace_runtime as runtime;
