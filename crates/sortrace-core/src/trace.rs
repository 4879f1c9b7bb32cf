#![forbid(unsafe_code)]

//! Immutable, replayable execution traces.
//!
//! A [`Trace`] bundles the untouched input, the ordered operation log, and
//! the sorted result produced by one generator invocation.
//!
//! # Invariants
//!
//! 1. Folding every operation over `input`, in order, yields `final_array`.
//! 2. `final_array` is sorted ascending.
//! 3. No operation references an index `>= input.len()`.
//! 4. A trace is never mutated after construction.

use crate::algorithm::Algorithm;
use crate::operation::{Operation, OperationKind, apply, apply_all};

/// The full record of one `generate()` call.
///
/// Deserialization re-checks the module invariants and rejects any trace
/// whose [`verify`](Trace::verify) report is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTrace"))]
pub struct Trace {
    algorithm: Algorithm,
    input: Vec<i32>,
    operations: Vec<Operation>,
    #[cfg_attr(feature = "serde", serde(rename = "final"))]
    final_array: Vec<i32>,
}

impl Trace {
    pub(crate) fn new(
        algorithm: Algorithm,
        input: Vec<i32>,
        operations: Vec<Operation>,
        final_array: Vec<i32>,
    ) -> Self {
        debug_assert_eq!(input.len(), final_array.len());
        Self {
            algorithm,
            input,
            operations,
            final_array,
        }
    }

    /// Algorithm that produced this trace.
    #[inline]
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The caller's original array.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &[i32] {
        &self.input
    }

    /// Ordered operation log.
    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The sorted result.
    #[inline]
    #[must_use]
    pub fn final_array(&self) -> &[i32] {
        &self.final_array
    }

    /// Number of operations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the log is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Array state after the first `k` operations (clamped to `len()`).
    #[must_use]
    pub fn state_at(&self, k: usize) -> Vec<i32> {
        let k = k.min(self.operations.len());
        let mut array = self.input.clone();
        apply_all(&mut array, &self.operations[..k]);
        array
    }

    /// Fold the whole log over the input.
    #[must_use]
    pub fn replay(&self) -> Vec<i32> {
        self.state_at(self.operations.len())
    }

    /// Every intermediate state, starting with the input itself.
    ///
    /// Yields `len() + 1` arrays.
    pub fn states(&self) -> impl Iterator<Item = Vec<i32>> + '_ {
        let mut array = self.input.clone();
        std::iter::once(array.clone()).chain(self.operations.iter().map(move |op| {
            apply(&mut array, op);
            array.clone()
        }))
    }

    /// Per-kind operation counts.
    #[must_use]
    pub fn summary(&self) -> OperationCounts {
        let mut counts = OperationCounts::default();
        for op in &self.operations {
            match op.kind() {
                OperationKind::Compare => counts.compares += 1,
                OperationKind::Swap => counts.swaps += 1,
                OperationKind::Set => counts.sets += 1,
                OperationKind::Highlight => counts.highlights += 1,
            }
        }
        counts
    }

    /// Check the trace invariants.
    ///
    /// Returns the list of violations; empty means the trace is consistent.
    #[must_use]
    pub fn verify(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let n = self.input.len();
        if let Some((pos, op)) = self
            .operations
            .iter()
            .enumerate()
            .find(|(_, op)| op.max_index() >= n)
        {
            errors.push(format!("operation {pos} ({op}) out of range for length {n}"));
            return errors;
        }
        if self.replay() != self.final_array {
            errors.push("replaying operations does not reproduce the final array".into());
        }
        if !self.final_array.is_sorted() {
            errors.push("final array is not sorted ascending".into());
        }
        errors
    }
}

/// Unchecked wire form of a [`Trace`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTrace {
    algorithm: Algorithm,
    input: Vec<i32>,
    operations: Vec<Operation>,
    #[serde(rename = "final")]
    final_array: Vec<i32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTrace> for Trace {
    type Error = String;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        if raw.input.len() != raw.final_array.len() {
            return Err(format!(
                "final array has {} values, input has {}",
                raw.final_array.len(),
                raw.input.len()
            ));
        }
        let trace = Self::new(raw.algorithm, raw.input, raw.operations, raw.final_array);
        let errors = trace.verify();
        if errors.is_empty() {
            Ok(trace)
        } else {
            Err(format!("invalid trace: {}", errors.join("; ")))
        }
    }
}

/// Count of each operation kind in a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationCounts {
    pub compares: usize,
    pub swaps: usize,
    pub sets: usize,
    pub highlights: usize,
}

impl OperationCounts {
    /// Total number of operations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.compares + self.swaps + self.sets + self.highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace {
        Trace::new(
            Algorithm::Bubble,
            vec![2, 1],
            vec![Operation::compare(0, 1), Operation::swap(0, 1)],
            vec![1, 2],
        )
    }

    #[test]
    fn state_at_clamps_past_end() {
        let trace = sample();
        assert_eq!(trace.state_at(0), vec![2, 1]);
        assert_eq!(trace.state_at(1), vec![2, 1]);
        assert_eq!(trace.state_at(2), vec![1, 2]);
        assert_eq!(trace.state_at(99), vec![1, 2]);
    }

    #[test]
    fn states_yields_len_plus_one() {
        let trace = sample();
        let states: Vec<_> = trace.states().collect();
        assert_eq!(states, vec![vec![2, 1], vec![2, 1], vec![1, 2]]);
    }

    #[test]
    fn summary_counts_kinds() {
        let counts = sample().summary();
        assert_eq!(counts.compares, 1);
        assert_eq!(counts.swaps, 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn verify_accepts_consistent_trace() {
        assert!(sample().verify().is_empty());
    }

    #[test]
    fn verify_flags_out_of_range_index() {
        let trace = Trace::new(
            Algorithm::Bubble,
            vec![1, 2],
            vec![Operation::compare(0, 2)],
            vec![1, 2],
        );
        let errors = trace.verify();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("out of range"));
    }

    #[test]
    fn verify_flags_replay_mismatch() {
        let trace = Trace::new(Algorithm::Bubble, vec![2, 1], vec![], vec![1, 2]);
        assert!(trace.verify()[0].contains("does not reproduce"));
    }
}
