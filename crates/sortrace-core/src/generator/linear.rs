//! Comparison-free linear sorts: LSD radix (base 10) and counting sort.
//!
//! Neither algorithm logs a `Compare`. Reading a key to bucket it is logged
//! as a `Highlight`; every placement is a `Set` written back from a scratch
//! output buffer.
//!
//! Keys are taken relative to the minimum when the input holds negatives,
//! so digits and bucket offsets are always non-negative. Ranges wider than
//! memory allows are a documented limitation, not a handled error.

use super::Recorder;

const RADIX: i64 = 10;

/// One stable counting pass per decimal digit of the largest key.
pub(super) fn radix_sort(rec: &mut Recorder<'_>) {
    let Some((min, max)) = bounds(rec.values()) else {
        return;
    };
    let offset = min.min(0);
    let max_key = max - offset;

    let mut exp: i64 = 1;
    while max_key / exp > 0 {
        digit_pass(rec, exp, offset);
        exp *= RADIX;
    }
}

/// Stable bucket pass on the digit selected by `exp`.
///
/// Buckets are re-derived from scratch each pass.
fn digit_pass(rec: &mut Recorder<'_>, exp: i64, offset: i64) {
    let values = rec.values().to_vec();
    let digit = |value: i32| ((i64::from(value) - offset) / exp % RADIX) as usize;

    let mut counts = [0usize; RADIX as usize];
    for (index, &value) in values.iter().enumerate() {
        rec.highlight(index);
        counts[digit(value)] += 1;
    }
    for bucket in 1..counts.len() {
        counts[bucket] += counts[bucket - 1];
    }

    let output = place_in_reverse(&values, &mut counts, digit);
    write_back(rec, output);
}

/// Counting sort over `max - min + 1` buckets.
pub(super) fn counting_sort(rec: &mut Recorder<'_>) {
    let Some((min, max)) = bounds(rec.values()) else {
        return;
    };
    let range = (max - min + 1) as usize;
    let values = rec.values().to_vec();
    let bucket = |value: i32| (i64::from(value) - min) as usize;

    let mut counts = vec![0usize; range];
    for (index, &value) in values.iter().enumerate() {
        rec.highlight(index);
        counts[bucket(value)] += 1;
    }
    for b in 1..range {
        counts[b] += counts[b - 1];
    }

    let output = place_in_reverse(&values, &mut counts, bucket);
    write_back(rec, output);
}

/// Scan `values` right to left, placing each at its cumulative slot.
///
/// The reverse scan keeps equal keys in input order.
fn place_in_reverse(
    values: &[i32],
    cumulative: &mut [usize],
    bucket: impl Fn(i32) -> usize,
) -> Vec<i32> {
    let mut output = vec![0; values.len()];
    for &value in values.iter().rev() {
        let b = bucket(value);
        cumulative[b] -= 1;
        output[cumulative[b]] = value;
    }
    output
}

fn write_back(rec: &mut Recorder<'_>, output: Vec<i32>) {
    for (index, value) in output.into_iter().enumerate() {
        rec.set(index, value);
    }
}

fn bounds(values: &[i32]) -> Option<(i64, i64)> {
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;
    Some((i64::from(min), i64::from(max)))
}
