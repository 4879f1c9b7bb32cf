#![no_main]

use libfuzzer_sys::fuzz_target;
use sortrace_core::{Algorithm, OperationKind, generate, generate_trace};

fuzz_target!(|data: &[u8]| {
    // First byte selects the algorithm; the rest become i16-range values so
    // counting sort's key range stays small.
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let algorithm = Algorithm::ALL[usize::from(selector) % Algorithm::ALL.len()];
    let input: Vec<i32> = payload
        .chunks_exact(2)
        .take(512)
        .map(|pair| i32::from(i16::from_le_bytes([pair[0], pair[1]])))
        .collect();

    let trace = generate_trace(algorithm, &input);

    let mut expected = input.clone();
    expected.sort_unstable();
    assert_eq!(trace.final_array(), expected.as_slice(), "not sorted");
    assert_eq!(trace.replay(), trace.final_array(), "replay diverged");
    assert_eq!(trace.input(), input.as_slice(), "input mutated");
    assert!(
        trace.operations().iter().all(|op| op.max_index() < input.len()),
        "index out of range"
    );
    if !algorithm.is_comparison_based() {
        assert_eq!(trace.summary().compares, 0, "linear sort compared");
        assert!(
            trace
                .operations()
                .iter()
                .all(|op| op.kind() != OperationKind::Swap),
            "linear sort swapped"
        );
    }

    // Name lookup agrees with the enum.
    let by_name = generate(algorithm.name(), &input);
    assert_eq!(by_name.as_ref(), Ok(&trace));

    // Arbitrary names either resolve or fail cleanly.
    if let Ok(name) = std::str::from_utf8(payload) {
        let _ = generate(name, &input);
    }
});
