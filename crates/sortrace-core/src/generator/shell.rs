//! Shell sort over the halving gap sequence.

use super::Recorder;

/// Gaps `n/2, n/4, ..., 1`. Each gapped insertion shifts with `Set` and
/// writes the held value back with a final `Set`; no `Swap` is ever logged.
pub(super) fn shell_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let held = rec.value(i);
            let mut j = i;
            while j >= gap {
                let prev = rec.value(j - gap);
                if rec.compare_values(j - gap, j, prev, held).is_le() {
                    break;
                }
                rec.set(j, prev);
                j -= gap;
            }
            rec.set(j, held);
        }
        gap /= 2;
    }
}
