//! Divide-and-conquer sorts: merge sort and Lomuto quick sort.

use super::Recorder;

pub(super) fn merge_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n > 1 {
        merge_sort_range(rec, 0, n - 1);
    }
}

/// Sorts the inclusive range `[left, right]`. Depth is O(log n).
fn merge_sort_range(rec: &mut Recorder<'_>, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort_range(rec, left, mid);
    merge_sort_range(rec, mid + 1, right);
    merge(rec, left, mid, right);
}

/// Left-biased merge of `[left, mid]` and `[mid + 1, right]`.
///
/// Both halves are copied out first, so every write-back is a `Set`.
/// Compare indices name the elements' positions at the start of the merge.
fn merge(rec: &mut Recorder<'_>, left: usize, mid: usize, right: usize) {
    let left_half = rec.values()[left..=mid].to_vec();
    let right_half = rec.values()[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_half.len() && j < right_half.len() {
        let (a, b) = (left_half[i], right_half[j]);
        if rec.compare_values(left + i, mid + 1 + j, a, b).is_le() {
            rec.set(k, a);
            i += 1;
        } else {
            rec.set(k, b);
            j += 1;
        }
        k += 1;
    }
    for &value in left_half[i..].iter().chain(&right_half[j..]) {
        rec.set(k, value);
        k += 1;
    }
}

/// Quick sort with an explicit work stack.
///
/// Ranges are popped left-before-right, which reproduces the recursive
/// visiting order without recursion depth growing with sorted input.
pub(super) fn quick_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }
    let mut pending = vec![(0, n - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(rec, low, high);
        pending.push((pivot + 1, high));
        if pivot > low {
            pending.push((low, pivot - 1));
        }
    }
}

/// Lomuto partition around `values[high]`. Returns the pivot's final index.
fn partition(rec: &mut Recorder<'_>, low: usize, high: usize) -> usize {
    rec.highlight(high);
    let mut store = low;
    for j in low..high {
        if rec.compare(j, high).is_lt() {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }
    if store != high {
        rec.swap(store, high);
    }
    store
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::generator::generate_trace;
    use crate::operation::{Operation, OperationKind};

    #[test]
    fn merge_sort_never_swaps() {
        let trace = generate_trace(Algorithm::Merge, &[9, 7, 5, 3, 1, 2, 4, 6, 8]);
        assert_eq!(trace.summary().swaps, 0);
        assert_eq!(trace.final_array(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn merge_sort_two_elements() {
        let trace = generate_trace(Algorithm::Merge, &[2, 1]);
        assert_eq!(
            trace.operations(),
            &[
                Operation::compare(0, 1),
                Operation::set(0, 1),
                Operation::set(1, 2),
            ]
        );
    }

    #[test]
    fn merge_ties_take_left_half_first() {
        // [1, 1]: the left 1 is written first; compare sees equal and picks left.
        let trace = generate_trace(Algorithm::Merge, &[1, 1]);
        assert_eq!(trace.operations()[0], Operation::compare(0, 1));
        assert_eq!(trace.operations()[1], Operation::set(0, 1));
    }

    #[test]
    fn quick_sort_highlights_last_element_as_pivot() {
        let trace = generate_trace(Algorithm::Quick, &[3, 1, 2]);
        assert_eq!(
            trace.operations(),
            &[
                Operation::highlight(2),
                Operation::compare(0, 2),
                Operation::compare(1, 2),
                Operation::swap(0, 1),
                Operation::swap(1, 2),
            ]
        );
        assert_eq!(trace.final_array(), &[1, 2, 3]);
    }

    #[test]
    fn quick_sort_skips_self_swaps() {
        let trace = generate_trace(Algorithm::Quick, &[1, 2, 3, 4]);
        assert_eq!(trace.summary().swaps, 0);
        let highlights = trace
            .operations()
            .iter()
            .filter(|op| op.kind() == OperationKind::Highlight)
            .count();
        assert_eq!(highlights, 3);
    }

    #[test]
    fn quick_sort_handles_long_sorted_input() {
        let input: Vec<i32> = (0..1_000).collect();
        let trace = generate_trace(Algorithm::Quick, &input);
        assert_eq!(trace.final_array(), input.as_slice());
    }
}
