#![forbid(unsafe_code)]

//! `sortrace` command-line tool.
//!
//! Thin front end over `sortrace-core` and `sortrace-runtime`: list the
//! algorithm catalogue, print a generated trace, or replay one through the
//! playback controller on a virtual clock.

pub mod cli;
pub mod error;
pub mod output;

pub use cli::{Cli, init_tracing, run, run_from_env};
pub use error::{CliError, Result};
