//! Timed and parallel runners
//!
//! A runner invokes one kernel `repeats` times against the shared buffer,
//! accumulates the per-invocation sums with wraparound addition, and
//! reports wall-clock elapsed time for the whole loop on stdout.
//!
//! The parallel runner partitions the repetition range across a worker
//! pool. Each worker folds its share into a local accumulator and merges
//! it into the shared total with a single atomic add, so the only
//! contended operation happens once per worker. Fixed-width wraparound
//! addition is associative and commutative, so the merged total equals
//! the sequential total for the same repetition count.

use std::hint::black_box;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicI32, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::buffer::Buffer;
use crate::core_types::Sum;
use crate::kernels::Kernel;

/// Outcome of one timed run: the accumulated wraparound total and the
/// wall-clock time the repetition loop took.
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    pub total: Sum,
    pub elapsed: Duration,
}

/// A paired safe/raw comparison diverged. Fatal: the two kernels did not
/// reduce the buffer to the same total.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("sum mismatch in \"{comparison}\": checked={checked} raw={raw}")]
    SumMismatch {
        comparison: String,
        checked: Sum,
        raw: Sum,
    },
}

/// Run `kernel` against `buffer` for `repeats` sequential iterations.
///
/// Prints the elapsed time and `label` to stdout and returns the
/// accumulated total.
pub fn run_timed(buffer: &Buffer, kernel: Kernel, repeats: u32, label: &str) -> RunResult {
    let start = Instant::now();

    let mut total: Sum = 0;
    for _ in 0..repeats {
        // black_box keeps the compiler from collapsing identical
        // iterations of the measured loop.
        total = total.wrapping_add(black_box(kernel(buffer)));
    }

    let elapsed = start.elapsed();
    println!(" {:.2?} for {}", elapsed, label);
    tracing::debug!("{} finished: total={} elapsed={:?}", label, total, elapsed);

    RunResult { total, elapsed }
}

/// Run `kernel` for `repeats` iterations distributed across `workers`
/// threads.
///
/// Same contract and reporting as [`run_timed`]; blocks until every
/// worker has merged its local accumulator into the shared total.
pub fn run_parallel(
    buffer: &Buffer,
    kernel: Kernel,
    repeats: u32,
    workers: NonZeroUsize,
    label: &str,
) -> RunResult {
    let start = Instant::now();

    let total = AtomicI32::new(0);
    let total_ref = &total;

    thread::scope(|s| {
        for share in partition(repeats, workers.get()) {
            s.spawn(move || {
                let mut local: Sum = 0;
                for _ in 0..share {
                    local = local.wrapping_add(black_box(kernel(buffer)));
                }
                // One merge per worker; fetch_add wraps on overflow.
                total_ref.fetch_add(local, Ordering::Relaxed);
            });
        }
        // Scope exit joins every worker.
    });

    let total = total.load(Ordering::Relaxed);
    let elapsed = start.elapsed();
    println!(" {:.2?} for {}", elapsed, label);
    tracing::debug!(
        "{} finished: total={} elapsed={:?} workers={}",
        label,
        total,
        elapsed,
        workers
    );

    RunResult { total, elapsed }
}

/// Split `repeats` into at most `workers` contiguous non-empty shares.
///
/// Shares differ in size by at most one; workers beyond the repetition
/// count get no share at all.
fn partition(repeats: u32, workers: usize) -> Vec<u32> {
    let workers = workers.min(repeats as usize).max(1);
    let base = repeats / workers as u32;
    let extra = repeats % workers as u32;

    (0..workers as u32)
        .map(|w| if w < extra { base + 1 } else { base })
        .filter(|&share| share > 0)
        .collect()
}

/// Require a paired comparison to have produced identical totals.
pub fn ensure_match(
    comparison: &str,
    checked: &RunResult,
    raw: &RunResult,
) -> Result<(), BenchError> {
    if checked.total != raw.total {
        return Err(BenchError::SumMismatch {
            comparison: comparison.to_string(),
            checked: checked.total,
            raw: raw.total,
        });
    }
    Ok(())
}
