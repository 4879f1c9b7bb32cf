//! Heap sort over an implicit max-heap.

use super::Recorder;

/// Bottom-up heap construction from `n/2 - 1` down to the root, then
/// repeated root extraction to the shrinking heap boundary.
pub(super) fn heap_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for root in (0..n / 2).rev() {
        sift_down(rec, n, root);
    }
    for end in (1..n).rev() {
        rec.swap(0, end);
        sift_down(rec, end, 0);
    }
}

/// Restore the heap property below `root` within the first `size` cells.
///
/// Only children that exist are compared, so a lone left child costs one
/// `Compare`, not two.
fn sift_down(rec: &mut Recorder<'_>, size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;
        if left < size && rec.compare(left, largest).is_gt() {
            largest = left;
        }
        if right < size && rec.compare(right, largest).is_gt() {
            largest = right;
        }
        if largest == root {
            return;
        }
        rec.swap(root, largest);
        root = largest;
    }
}
