//! Cross-kernel equivalence checks run through the public runner API.
//!
//! These are the harness's own correctness properties: every raw-pointer
//! kernel must reduce a buffer to exactly the sum of its bounds-checked
//! twin, and the parallel runner must reproduce the sequential total.

use std::num::NonZeroUsize;

use boundsbench::buffer::Buffer;
use boundsbench::kernels;
use boundsbench::rng::Lcg;
use boundsbench::runner::{ensure_match, run_parallel, run_timed};

/// Helper: a deterministic mid-sized buffer.
fn seeded_buffer(len: usize, seed: i64) -> Buffer {
    Buffer::generate(len, &mut Lcg::new(seed))
}

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn linear_checked_equals_raw_over_repetitions() {
    let buffer = seeded_buffer(10_000, 77);
    let repeats = 25;

    let checked = run_timed(&buffer, kernels::linear_indexed, repeats, "checked indexing");
    let raw = run_timed(&buffer, kernels::linear_raw, repeats, "raw offset");

    assert_eq!(
        checked.total, raw.total,
        "raw offset traversal must reproduce the checked sum"
    );
    ensure_match("Linear array access", &checked, &raw).unwrap();
}

#[test]
fn linear_cursor_variants_equal_indexed() {
    let buffer = seeded_buffer(10_000, 78);
    let repeats = 25;

    let indexed = run_timed(&buffer, kernels::linear_indexed, repeats, "checked indexing");
    let cursor = run_timed(&buffer, kernels::linear_cursor, repeats, "checked cursor");
    let raw_cursor = run_timed(&buffer, kernels::linear_raw_cursor, repeats, "raw cursor");

    // All three traverse the same elements in the same order.
    assert_eq!(cursor.total, indexed.total);
    assert_eq!(raw_cursor.total, indexed.total);
}

#[test]
fn random_checked_equals_raw_over_repetitions() {
    let buffer = seeded_buffer(10_000, 79);
    let repeats = 25;

    let checked = run_timed(&buffer, kernels::random_indexed, repeats, "checked indexing");
    let raw = run_timed(&buffer, kernels::random_raw, repeats, "raw offset");

    assert_eq!(
        checked.total, raw.total,
        "raw random walk must visit the same indices as the checked one"
    );
}

#[test]
fn parallel_total_equals_sequential_total() {
    let buffer = seeded_buffer(5_000, 80);
    let repeats = 40;

    let sequential = run_timed(&buffer, kernels::random_indexed, repeats, "sequential");

    for n in [1, 2, 4, 64] {
        let checked = run_parallel(
            &buffer,
            kernels::random_indexed,
            repeats,
            workers(n),
            "parallel checked",
        );
        let raw = run_parallel(
            &buffer,
            kernels::random_raw,
            repeats,
            workers(n),
            "parallel raw",
        );

        assert_eq!(
            checked.total, sequential.total,
            "parallel checked total must match sequential with {} workers",
            n
        );
        assert_eq!(
            raw.total, sequential.total,
            "parallel raw total must match sequential with {} workers",
            n
        );
    }
}

/// The reference scenario, end to end through the runners:
/// B = [5, 3, 9, 1], one repetition, linear 18 and random 10.
#[test]
fn reference_scenario_through_runners() {
    let buffer = Buffer::from_values(vec![5, 3, 9, 1]);

    let linear = run_timed(&buffer, kernels::linear_indexed, 1, "linear");
    assert_eq!(linear.total, 18);

    let random = run_timed(&buffer, kernels::random_indexed, 1, "random");
    assert_eq!(random.total, 10);

    let random_raw = run_timed(&buffer, kernels::random_raw, 1, "random raw");
    assert_eq!(random_raw.total, 10);
}

/// N = 1 boundary: every random step reduces to index 0; nothing reads
/// out of bounds in either variant.
#[test]
fn single_element_buffer_is_safe_everywhere() {
    let buffer = Buffer::from_values(vec![3]);
    let repeats = 10;

    let checked = run_timed(&buffer, kernels::random_indexed, repeats, "checked");
    let raw = run_timed(&buffer, kernels::random_raw, repeats, "raw");
    let parallel = run_parallel(&buffer, kernels::random_raw, repeats, workers(4), "par");

    let expected = (0..repeats).fold(0i32, |acc, _| acc.wrapping_add(3));
    assert_eq!(checked.total, expected);
    assert_eq!(raw.total, expected);
    assert_eq!(parallel.total, expected);
}

/// Accumulated totals wrap at 32 bits identically in every path.
#[test]
fn wraparound_is_identical_across_paths() {
    // Large elements force wraparound within a few repetitions.
    let buffer = Buffer::from_values(vec![i32::MAX, i32::MAX - 1, 1_000_000_000]);
    let repeats = 9;

    let checked = run_timed(&buffer, kernels::linear_indexed, repeats, "checked");
    let raw = run_timed(&buffer, kernels::linear_raw, repeats, "raw");
    let raw_cursor = run_timed(&buffer, kernels::linear_raw_cursor, repeats, "raw cursor");
    let parallel = run_parallel(&buffer, kernels::linear_indexed, repeats, workers(2), "par");

    assert_eq!(checked.total, raw.total);
    assert_eq!(checked.total, raw_cursor.total);
    assert_eq!(checked.total, parallel.total);
}

/// A mismatch surfaces as an error naming the comparison.
#[test]
fn mismatch_reports_comparison_name() {
    let buffer = seeded_buffer(100, 81);

    let linear = run_timed(&buffer, kernels::linear_indexed, 1, "linear");
    let random = run_timed(&buffer, kernels::random_indexed, 1, "random");

    // Unrelated kernels: totals almost surely differ; if they happen to
    // collide the comparison legitimately passes.
    if linear.total != random.total {
        let err = ensure_match("Deliberate mismatch", &linear, &random).unwrap_err();
        assert!(err.to_string().contains("Deliberate mismatch"));
    }
}
