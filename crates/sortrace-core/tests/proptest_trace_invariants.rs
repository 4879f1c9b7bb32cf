#![forbid(unsafe_code)]

//! Property tests for trace generation invariants.
//!
//! Validates:
//! - Every algorithm sorts every input, including duplicates and negatives.
//! - Folding the mutating operations over the input reproduces the final array.
//! - The caller's input is never mutated.
//! - Compare counts stay inside O(n²) / O(n log n) envelopes.
//! - Unknown names are always rejected, whatever the input.

use proptest::prelude::*;

use sortrace_core::{
    Algorithm, GenerateError, InputPreset, InputSpec, Metrics, OperationKind, generate,
    generate_trace, generate_with_metrics,
};

// ============================================================================
// Strategy helpers
// ============================================================================

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn array_strategy(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        4 => prop::collection::vec(-1_000i32..1_000, 0..=max_len),
        1 => prop::collection::vec(0i32..4, 0..=max_len),
        1 => (0..=max_len).prop_map(|n| (0..n as i32).collect()),
        1 => (0..=max_len).prop_map(|n| (0..n as i32).rev().collect()),
    ]
}

fn sorted(input: &[i32]) -> Vec<i32> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

fn n_log_n(n: usize) -> f64 {
    let n = n as f64;
    n * n.log2()
}

// ============================================================================
// Invariant 1: final array is the input sorted ascending
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn final_array_is_sorted_input(
        algorithm in algorithm_strategy(),
        input in array_strategy(96),
    ) {
        let trace = generate_trace(algorithm, &input);
        let expected = sorted(&input);
        prop_assert_eq!(trace.final_array(), expected.as_slice());
    }
}

// ============================================================================
// Invariant 2: replay fidelity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn replaying_mutations_reproduces_final(
        algorithm in algorithm_strategy(),
        input in array_strategy(96),
    ) {
        let trace = generate_trace(algorithm, &input);

        let mut array = input.clone();
        for op in trace.operations().iter().filter(|op| op.is_mutating()) {
            sortrace_core::apply(&mut array, op);
        }
        prop_assert_eq!(array.as_slice(), trace.final_array());
        prop_assert!(trace.verify().is_empty(), "{:?}", trace.verify());
    }

    #[test]
    fn input_is_never_mutated(
        algorithm in algorithm_strategy(),
        input in array_strategy(64),
    ) {
        let before = input.clone();
        let trace = generate_trace(algorithm, &input);
        prop_assert_eq!(&input, &before);
        prop_assert_eq!(trace.input(), before.as_slice());
    }

    #[test]
    fn every_index_is_in_range(
        algorithm in algorithm_strategy(),
        input in array_strategy(64),
    ) {
        let trace = generate_trace(algorithm, &input);
        for op in trace.operations() {
            prop_assert!(op.max_index() < input.len(), "{} out of range", op);
        }
    }
}

// ============================================================================
// Invariant 3: operation-count envelopes
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn quadratic_sorts_stay_under_n_squared(input in array_strategy(80)) {
        let n = input.len();
        let pairs = n * n.saturating_sub(1) / 2;
        for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
            let compares = generate_trace(algorithm, &input).summary().compares;
            prop_assert!(compares <= pairs, "{algorithm}: {compares} > {pairs}");
        }
    }

    #[test]
    fn n_log_n_sorts_on_random_input(seed in any::<u64>(), n in 16usize..400) {
        let input = InputSpec::new(InputPreset::Random, n)
            .with_range(-1_000_000, 1_000_000)
            .with_seed(seed)
            .generate();
        let ceiling = 4.0 * n_log_n(n);
        for algorithm in [Algorithm::Merge, Algorithm::Quick, Algorithm::Heap] {
            let compares = generate_trace(algorithm, &input).summary().compares as f64;
            prop_assert!(
                compares <= ceiling,
                "{algorithm}: {compares} compares exceeds {ceiling} for n={n}"
            );
            prop_assert!(compares >= (n / 2) as f64, "{algorithm}: suspiciously few compares");
        }
    }

    #[test]
    fn linear_sorts_never_compare(input in array_strategy(64)) {
        for algorithm in [Algorithm::Radix, Algorithm::Counting] {
            let trace = generate_trace(algorithm, &input);
            prop_assert!(trace.operations().iter().all(|op| op.kind() != OperationKind::Compare));
        }
    }

    #[test]
    fn metrics_agree_with_trace(
        algorithm in algorithm_strategy(),
        input in array_strategy(64),
    ) {
        let mut metrics = Metrics::new();
        let trace = generate_with_metrics(algorithm, &input, &mut metrics);
        let counts = trace.summary();
        prop_assert_eq!(metrics.comparisons(), counts.compares as u64);
        prop_assert_eq!(metrics.swaps(), counts.swaps as u64);
    }
}

// ============================================================================
// Invariant 4: unknown names are rejected regardless of input
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unknown_names_always_fail(
        name in "[A-Za-z ]{0,16}",
        input in array_strategy(16),
    ) {
        prop_assume!(name.parse::<Algorithm>().is_err());
        prop_assert_eq!(
            generate(&name, &input),
            Err(GenerateError::UnknownAlgorithm { name: name.clone() })
        );
    }

    #[test]
    fn not_a_real_sort_always_fails(input in array_strategy(32)) {
        let is_unknown = matches!(
            generate("NotARealSort", &input),
            Err(GenerateError::UnknownAlgorithm { .. })
        );
        prop_assert!(is_unknown);
    }
}
