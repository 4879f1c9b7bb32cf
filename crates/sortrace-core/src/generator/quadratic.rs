//! The three O(n²) comparison sorts.

use super::Recorder;

/// Adjacent-pair passes; stops after a pass with no swaps.
pub(super) fn bubble_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if rec.compare(j, j + 1).is_gt() {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Left-most minimum wins: candidates are replaced only on strict `<`.
pub(super) fn selection_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        rec.highlight(min);
        for j in i + 1..n {
            if rec.compare(j, min).is_lt() {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
    }
}

/// Shifts are `Set`s into the hole; the key lands with a final `Set`.
pub(super) fn insertion_sort(rec: &mut Recorder<'_>) {
    for i in 1..rec.len() {
        let key = rec.value(i);
        let mut j = i;
        while j > 0 {
            let prev = rec.value(j - 1);
            if rec.compare_values(j - 1, j, prev, key).is_le() {
                break;
            }
            rec.set(j, prev);
            j -= 1;
        }
        rec.set(j, key);
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::generator::generate_trace;
    use crate::operation::{Operation, OperationKind};

    #[test]
    fn bubble_sort_stops_after_clean_pass() {
        let trace = generate_trace(Algorithm::Bubble, &[1, 2, 3, 4]);
        assert_eq!(trace.len(), 3);
        assert!(trace.operations().iter().all(|op| op.kind() == OperationKind::Compare));
    }

    #[test]
    fn bubble_sort_reverse_input_hits_quadratic_bound() {
        let n = 6;
        let input: Vec<i32> = (0..n).rev().collect();
        let counts = generate_trace(Algorithm::Bubble, &input).summary();
        let pairs = (n * (n - 1) / 2) as usize;
        assert_eq!(counts.compares, pairs);
        assert_eq!(counts.swaps, pairs);
    }

    #[test]
    fn selection_sort_highlights_each_outer_candidate() {
        let trace = generate_trace(Algorithm::Selection, &[3, 1, 2]);
        assert_eq!(
            trace.operations(),
            &[
                Operation::highlight(0),
                Operation::compare(1, 0),
                Operation::compare(2, 1),
                Operation::swap(0, 1),
                Operation::highlight(1),
                Operation::compare(2, 1),
                Operation::swap(1, 2),
            ]
        );
    }

    #[test]
    fn selection_sort_prefers_leftmost_minimum() {
        // Both 1s tie; the strict comparison keeps index 1 as the minimum.
        let trace = generate_trace(Algorithm::Selection, &[5, 1, 1]);
        assert_eq!(trace.operations()[3], Operation::swap(0, 1));
    }

    #[test]
    fn insertion_sort_shifts_with_set_never_swap() {
        let trace = generate_trace(Algorithm::Insertion, &[3, 2, 1]);
        let counts = trace.summary();
        assert_eq!(counts.swaps, 0);
        assert_eq!(
            trace.operations(),
            &[
                Operation::compare(0, 1),
                Operation::set(1, 3),
                Operation::set(0, 2),
                Operation::compare(1, 2),
                Operation::set(2, 3),
                Operation::compare(0, 1),
                Operation::set(1, 2),
                Operation::set(0, 1),
            ]
        );
    }

    #[test]
    fn insertion_sort_on_sorted_input_is_linear() {
        let input: Vec<i32> = (0..50).collect();
        let counts = generate_trace(Algorithm::Insertion, &input).summary();
        assert_eq!(counts.compares, 49);
    }
}
