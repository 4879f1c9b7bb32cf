#![forbid(unsafe_code)]

//! Trace generation: instrumented sorting over a private working copy.
//!
//! Every algorithm receives a `Recorder` instead of a bare slice. The
//! recorder owns the working copy, appends each [`Operation`] to the log,
//! applies it to the working copy through the same [`apply`] used by replay,
//! and feeds the caller's [`Metrics`]. Recursive algorithms thread the same
//! `&mut Recorder` through each call, so ordering never depends on shared
//! mutable state.
//!
//! # Invariants
//!
//! 1. The caller's input slice is only read, never written.
//! 2. The working copy always equals `input` with every logged operation
//!    applied, which makes replay fidelity hold by construction.
//! 3. Each comparison between two positions is logged as exactly one
//!    `Compare`.
//!
//! # Failure Modes
//!
//! - Unknown algorithm name: [`GenerateError::UnknownAlgorithm`](crate::error::GenerateError::UnknownAlgorithm).
//! - Empty or single-element input: valid, yields an empty or trivial trace.

mod divide;
mod heap;
mod linear;
mod quadratic;
mod shell;

use std::cmp::Ordering;

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::metrics::Metrics;
use crate::operation::{Operation, apply};
use crate::trace::Trace;

/// Append-only operation log bound to a working copy.
#[derive(Debug)]
pub(crate) struct Recorder<'m> {
    working: Vec<i32>,
    operations: Vec<Operation>,
    metrics: &'m mut Metrics,
}

impl<'m> Recorder<'m> {
    fn new(input: &[i32], metrics: &'m mut Metrics) -> Self {
        Self {
            working: input.to_vec(),
            operations: Vec::new(),
            metrics,
        }
    }

    /// Length of the working copy. Fixed for the whole run.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Current value at `index`. Reading is not an operation.
    #[inline]
    #[must_use]
    pub fn value(&self, index: usize) -> i32 {
        self.working[index]
    }

    /// Current contents of the working copy.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.working
    }

    /// Log `Compare(i, j)` and order the values currently at `i` and `j`.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let (left, right) = (self.working[i], self.working[j]);
        self.compare_values(i, j, left, right)
    }

    /// Log `Compare(i, j)` but order `left` against `right`.
    ///
    /// For algorithms that hold one side in a temporary (insertion key,
    /// merge halves) while the cell itself is stale.
    pub fn compare_values(&mut self, i: usize, j: usize, left: i32, right: i32) -> Ordering {
        self.push(Operation::compare(i, j));
        left.cmp(&right)
    }

    /// Log and perform `Swap(i, j)`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.push(Operation::swap(i, j));
    }

    /// Log and perform `Set(index, value)`.
    pub fn set(&mut self, index: usize, value: i32) {
        self.push(Operation::set(index, value));
    }

    /// Log `Highlight(index)`.
    pub fn highlight(&mut self, index: usize) {
        self.push(Operation::highlight(index));
    }

    fn push(&mut self, op: Operation) {
        debug_assert!(op.max_index() < self.working.len(), "{op} out of range");
        apply(&mut self.working, &op);
        self.metrics.record(&op);
        self.operations.push(op);
    }

    fn finish(self) -> (Vec<Operation>, Vec<i32>) {
        (self.operations, self.working)
    }
}

/// Implementation table: one entry per [`Algorithm`].
fn implementation(algorithm: Algorithm) -> fn(&mut Recorder<'_>) {
    match algorithm {
        Algorithm::Bubble => quadratic::bubble_sort,
        Algorithm::Selection => quadratic::selection_sort,
        Algorithm::Insertion => quadratic::insertion_sort,
        Algorithm::Merge => divide::merge_sort,
        Algorithm::Quick => divide::quick_sort,
        Algorithm::Heap => heap::heap_sort,
        Algorithm::Shell => shell::shell_sort,
        Algorithm::Radix => linear::radix_sort,
        Algorithm::Counting => linear::counting_sort,
    }
}

/// Generate a trace for an algorithm named by string.
///
/// Fails only with [`GenerateError::UnknownAlgorithm`](crate::error::GenerateError::UnknownAlgorithm).
pub fn generate(algorithm_name: &str, input: &[i32]) -> Result<Trace> {
    let algorithm: Algorithm = algorithm_name.parse()?;
    Ok(generate_trace(algorithm, input))
}

/// Generate a trace for a known algorithm. Never fails.
#[must_use]
pub fn generate_trace(algorithm: Algorithm, input: &[i32]) -> Trace {
    let mut metrics = Metrics::new();
    generate_with_metrics(algorithm, input, &mut metrics)
}

/// Generate a trace, accumulating counters and wall-clock time into
/// `metrics`.
///
/// `metrics` is not reset here; call [`Metrics::reset`] before each run to
/// report a single invocation.
pub fn generate_with_metrics(algorithm: Algorithm, input: &[i32], metrics: &mut Metrics) -> Trace {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "sortrace.generate",
        algorithm = algorithm.slug(),
        len = input.len()
    )
    .entered();

    metrics.start();
    let mut recorder = Recorder::new(input, metrics);
    implementation(algorithm)(&mut recorder);
    let (operations, final_array) = recorder.finish();
    metrics.stop();

    let trace = Trace::new(algorithm, input.to_vec(), operations, final_array);

    #[cfg(feature = "tracing")]
    {
        let counts = trace.summary();
        tracing::debug!(
            operations = trace.len(),
            comparisons = counts.compares,
            swaps = counts.swaps,
            elapsed_us = metrics.elapsed().as_micros() as u64,
            "trace generated"
        );
    }

    trace
}

/// Resolve a name and generate in one call, reporting into `metrics`.
pub fn generate_named_with_metrics(
    algorithm_name: &str,
    input: &[i32],
    metrics: &mut Metrics,
) -> Result<Trace> {
    let algorithm: Algorithm = algorithm_name.parse()?;
    Ok(generate_with_metrics(algorithm, input, metrics))
}
