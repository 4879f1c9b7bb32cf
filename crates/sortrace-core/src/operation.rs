#![forbid(unsafe_code)]

//! Atomic, independently replayable operations.
//!
//! An [`Operation`] describes one unit of work an instrumented algorithm
//! performed against its working copy. Traces are nothing more than an
//! ordered list of these values, so every intermediate array state can be
//! rebuilt by folding [`apply`] over the original input.
//!
//! # Invariants
//!
//! 1. Every index is a valid position in the array the operation was recorded
//!    against. Array length never changes during a sort.
//! 2. [`Operation::Compare`] and [`Operation::Highlight`] are read-only.
//! 3. [`Operation::Swap`] and [`Operation::Set`] are the only mutating kinds.
//!
//! # Failure Modes
//!
//! None. Indices are in range by construction; `apply` trusts the generator
//! and will panic on an out-of-range index like any slice access.

use std::fmt;

/// One atomic action recorded during trace generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Operation {
    /// Two positions were compared.
    Compare { i: usize, j: usize },
    /// Two positions exchanged their values.
    Swap { i: usize, j: usize },
    /// A value was written to a position without a symmetric exchange.
    Set { index: usize, value: i32 },
    /// A single position was marked (pivot, minimum candidate, digit read).
    Highlight { index: usize },
}

impl Operation {
    /// Construct a comparison between `i` and `j`.
    #[inline]
    #[must_use]
    pub const fn compare(i: usize, j: usize) -> Self {
        Self::Compare { i, j }
    }

    /// Construct an exchange of `i` and `j`.
    #[inline]
    #[must_use]
    pub const fn swap(i: usize, j: usize) -> Self {
        Self::Swap { i, j }
    }

    /// Construct a direct write of `value` at `index`.
    #[inline]
    #[must_use]
    pub const fn set(index: usize, value: i32) -> Self {
        Self::Set { index, value }
    }

    /// Construct a highlight of `index`.
    #[inline]
    #[must_use]
    pub const fn highlight(index: usize) -> Self {
        Self::Highlight { index }
    }

    /// Whether replaying this operation changes any array cell.
    #[inline]
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::Swap { .. } | Self::Set { .. })
    }

    /// The kind of this operation, without its payload.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Compare { .. } => OperationKind::Compare,
            Self::Swap { .. } => OperationKind::Swap,
            Self::Set { .. } => OperationKind::Set,
            Self::Highlight { .. } => OperationKind::Highlight,
        }
    }

    /// Largest index referenced by this operation.
    #[must_use]
    pub fn max_index(&self) -> usize {
        match *self {
            Self::Compare { i, j } | Self::Swap { i, j } => i.max(j),
            Self::Set { index, .. } | Self::Highlight { index } => index,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { i, j } => write!(f, "Compare({i}, {j})"),
            Self::Swap { i, j } => write!(f, "Swap({i}, {j})"),
            Self::Set { index, value } => write!(f, "Set({index}, {value})"),
            Self::Highlight { index } => write!(f, "Highlight({index})"),
        }
    }
}

/// Payload-free discriminant of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OperationKind {
    Compare,
    Swap,
    Set,
    Highlight,
}

/// Apply one operation to `array`.
///
/// No-op for `Compare` and `Highlight`; performs the write for `Swap` and
/// `Set`. Used both while generating (to keep the working copy in step with
/// the log) and while replaying.
#[inline]
pub fn apply(array: &mut [i32], op: &Operation) {
    match *op {
        Operation::Swap { i, j } => array.swap(i, j),
        Operation::Set { index, value } => array[index] = value,
        Operation::Compare { .. } | Operation::Highlight { .. } => {}
    }
}

/// Fold every operation in `ops` over `array`, in order.
pub fn apply_all<'a>(array: &mut [i32], ops: impl IntoIterator<Item = &'a Operation>) {
    for op in ops {
        apply(array, op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_operations_leave_array_untouched() {
        let mut array = vec![3, 1, 2];
        apply(&mut array, &Operation::compare(0, 2));
        apply(&mut array, &Operation::highlight(1));
        assert_eq!(array, vec![3, 1, 2]);
    }

    #[test]
    fn swap_exchanges_cells() {
        let mut array = vec![3, 1, 2];
        apply(&mut array, &Operation::swap(0, 2));
        assert_eq!(array, vec![2, 1, 3]);
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let mut array = vec![9, 4, 7, 1];
        let op = Operation::swap(1, 3);
        apply(&mut array, &op);
        apply(&mut array, &op);
        assert_eq!(array, vec![9, 4, 7, 1]);
    }

    #[test]
    fn set_overwrites_single_cell() {
        let mut array = vec![0, 0, 0];
        apply(&mut array, &Operation::set(1, 42));
        assert_eq!(array, vec![0, 42, 0]);
    }

    #[test]
    fn apply_all_folds_in_order() {
        let mut array = vec![1, 2];
        let ops = [
            Operation::set(0, 5),
            Operation::swap(0, 1),
            Operation::set(0, 7),
        ];
        apply_all(&mut array, &ops);
        assert_eq!(array, vec![7, 5]);
    }

    #[test]
    fn mutating_flag_matches_kind() {
        assert!(!Operation::compare(0, 1).is_mutating());
        assert!(!Operation::highlight(0).is_mutating());
        assert!(Operation::swap(0, 1).is_mutating());
        assert!(Operation::set(0, 1).is_mutating());
    }

    #[test]
    fn display_uses_call_notation() {
        assert_eq!(Operation::compare(0, 1).to_string(), "Compare(0, 1)");
        assert_eq!(Operation::set(3, -2).to_string(), "Set(3, -2)");
        assert_eq!(Operation::highlight(4).to_string(), "Highlight(4)");
    }

    #[test]
    fn max_index_covers_both_operands() {
        assert_eq!(Operation::swap(5, 2).max_index(), 5);
        assert_eq!(Operation::compare(1, 8).max_index(), 8);
        assert_eq!(Operation::set(3, 0).max_index(), 3);
    }
}
