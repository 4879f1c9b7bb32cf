#![forbid(unsafe_code)]

//! Property tests for playback scrubbing.
//!
//! Validates:
//! - `seek(k)` yields exactly `trace.state_at(k)` for every reachable k.
//! - Stepping backward k times from k returns to the input, and stepping
//!   forward again returns to the same state.
//! - Arbitrary interleavings of steps and seeks never desynchronize the
//!   derived array from the trace.
//! - Auto-play over any time slicing ends on the sorted array.

use proptest::prelude::*;

use sortrace_core::{Algorithm, Trace, generate_trace};
use sortrace_runtime::{PlaybackController, PlaybackState};
use web_time::Duration;

// ============================================================================
// Strategy helpers
// ============================================================================

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn trace_strategy() -> impl Strategy<Value = Trace> {
    (
        algorithm_strategy(),
        prop::collection::vec(-200i32..200, 0..=40),
    )
        .prop_map(|(algorithm, input)| generate_trace(algorithm, &input))
}

#[derive(Debug, Clone)]
enum Nav {
    Forward,
    Backward,
    Seek(usize),
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![
        3 => Just(Nav::Forward),
        3 => Just(Nav::Backward),
        1 => any::<usize>().prop_map(Nav::Seek),
    ]
}

// ============================================================================
// Invariant 1: seek matches trace replay
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn seek_matches_state_at(trace in trace_strategy(), picks in prop::collection::vec(any::<usize>(), 1..8)) {
        let len = trace.len();
        let mut pc = PlaybackController::new(trace.clone());
        for pick in picks {
            let k = if len == 0 { 0 } else { pick % (len + 1) };
            pc.seek(k);
            prop_assert_eq!(pc.position(), k);
            let expected = trace.state_at(k);
            prop_assert_eq!(pc.current_array(), expected.as_slice());
        }
    }
}

// ============================================================================
// Invariant 2: backward then forward is the identity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn scrub_round_trip(trace in trace_strategy(), pick in any::<usize>()) {
        let k = pick % (trace.len() + 1);
        let mut pc = PlaybackController::new(trace.clone());
        pc.seek(k);
        let at_k = pc.current_array().to_vec();

        for _ in 0..k {
            prop_assert!(pc.step_backward().is_some());
        }
        prop_assert_eq!(pc.position(), 0);
        prop_assert_eq!(pc.current_array(), trace.input());
        prop_assert!(pc.step_backward().is_none());

        for _ in 0..k {
            prop_assert!(pc.step_forward().is_some());
        }
        prop_assert_eq!(pc.current_array(), at_k.as_slice());
    }
}

// ============================================================================
// Invariant 3: arbitrary navigation stays in sync
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn navigation_never_desyncs(
        trace in trace_strategy(),
        moves in prop::collection::vec(nav_strategy(), 0..64),
    ) {
        let len = trace.len();
        let mut pc = PlaybackController::new(trace.clone());
        for nav in moves {
            match nav {
                Nav::Forward => { pc.step_forward(); }
                Nav::Backward => { pc.step_backward(); }
                Nav::Seek(k) => pc.seek(k),
            }
            prop_assert!(pc.position() <= len);
            prop_assert_ne!(pc.state(), PlaybackState::Playing);
            let expected = trace.state_at(pc.position());
            prop_assert_eq!(pc.current_array(), expected.as_slice());
        }
    }
}

// ============================================================================
// Invariant 4: auto-play always finishes sorted
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn auto_play_reaches_final_array(
        trace in trace_strategy(),
        speed in 0.1f64..16.0,
        slices_ms in prop::collection::vec(1u64..500, 1..16),
    ) {
        let mut pc = PlaybackController::new(trace.clone());
        pc.set_speed(speed);
        pc.play();

        let mut applied = 0usize;
        for ms in slices_ms {
            applied += pc.advance(Duration::from_millis(ms)).len();
            prop_assert_eq!(pc.position(), applied);
        }
        // Flush whatever remains.
        while pc.state() == PlaybackState::Playing {
            applied += pc.advance(Duration::from_secs(3600)).len();
        }

        prop_assert_eq!(applied, trace.len());
        prop_assert_eq!(pc.state(), PlaybackState::Completed);
        prop_assert_eq!(pc.current_array(), trace.final_array());
    }
}
