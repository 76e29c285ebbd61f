//! boundsbench - Bounds-Check vs Raw-Pointer Micro-Benchmark
//!
//! Measures the cost of bounds-checked indexing against raw pointer
//! arithmetic over a large shared integer buffer, under linear and
//! random access patterns, sequentially and across a worker pool.
//!
//! # Modules
//!
//! - [`core_types`] - Element and sum type aliases
//! - [`rng`] - 48-bit LCG pseudo-random source
//! - [`buffer`] - Shared immutable benchmark buffer
//! - [`kernels`] - The six paired access kernels
//! - [`runner`] - Timed and parallel repetition runners
//! - [`config`] - Ambient application configuration
//! - [`logging`] - Tracing initialization

// Core types - must be first!
pub mod core_types;

// Benchmark components
pub mod buffer;
pub mod config;
pub mod kernels;
pub mod logging;
pub mod rng;
pub mod runner;

// Convenient re-exports at crate root
pub use buffer::Buffer;
pub use config::AppConfig;
pub use core_types::{Elem, Sum};
pub use kernels::Kernel;
pub use rng::Lcg;
pub use runner::{BenchError, RunResult, ensure_match, run_parallel, run_timed};
