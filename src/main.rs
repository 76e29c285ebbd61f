//! boundsbench - Bounds-Check vs Raw-Pointer Micro-Benchmark
//!
//! Entry point. Control flow:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────┐
//! │  Config  │───▶│  Buffer  │───▶│  Comparisons │───▶│  Stdout  │
//! │  (YAML)  │    │ (1M i32) │    │ (4 × paired) │    │  Report  │
//! └──────────┘    └──────────┘    └──────────────┘    └──────────┘
//! ```
//!
//! Each comparison runs the checked kernel, then its raw-pointer twin,
//! and requires both accumulated totals to be identical. A divergence
//! exits the process with a non-zero status.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use boundsbench::buffer::Buffer;
use boundsbench::kernels;
use boundsbench::rng::Lcg;
use boundsbench::runner::{ensure_match, run_parallel, run_timed};

/// Number of elements in the shared buffer.
const BUFFER_LEN: usize = 1_000_000;

/// Sequential/parallel repetitions per run.
const REPEATS: u32 = 10_000;

fn main() -> anyhow::Result<()> {
    let app_config = boundsbench::config::AppConfig::load_or_default();
    let _log_guard = boundsbench::logging::init_logging(&app_config);

    tracing::info!(
        "Starting boundsbench {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    let start_time = Instant::now();

    let mut rng = Lcg::from_entropy();
    let buffer = Buffer::generate(BUFFER_LEN, &mut rng);
    tracing::info!("Generated {} element buffer, repeats={}", buffer.len(), REPEATS);

    println!("Linear array access");
    let checked = run_timed(&buffer, kernels::linear_indexed, REPEATS, "checked indexing");
    let raw = run_timed(&buffer, kernels::linear_raw, REPEATS, "raw offset");
    ensure_match("Linear array access", &checked, &raw)?;

    println!("Linear array access - with cursor increment");
    let checked = run_timed(&buffer, kernels::linear_cursor, REPEATS, "checked cursor");
    let raw = run_timed(&buffer, kernels::linear_raw_cursor, REPEATS, "raw cursor (*p++)");
    ensure_match("Linear array access - with cursor increment", &checked, &raw)?;

    println!("Random array access");
    let checked = run_timed(&buffer, kernels::random_indexed, REPEATS, "checked indexing");
    let raw = run_timed(&buffer, kernels::random_raw, REPEATS, "raw offset");
    ensure_match("Random array access", &checked, &raw)?;

    let workers = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    println!("Random array access on worker pool, with {} workers", workers);
    let checked = run_parallel(
        &buffer,
        kernels::random_indexed,
        REPEATS,
        workers,
        "checked indexing",
    );
    let raw = run_parallel(&buffer, kernels::random_raw, REPEATS, workers, "raw offset");
    ensure_match("Random array access on worker pool", &checked, &raw)?;

    tracing::info!("All comparisons matched");
    println!("\n=== Done in {:.2?} ===", start_time.elapsed());

    Ok(())
}
