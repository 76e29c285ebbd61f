//! Core types used throughout the benchmark
//!
//! These are fundamental type aliases used by all modules.
//! They pin down the integer domain the measurements run in.

/// Buffer element - a signed 32-bit integer.
///
/// # Constraints:
/// - **Non-negative by construction**: every element produced by the
///   generator lies in `[0, i32::MAX]`
/// - **Immutable**: the buffer is never mutated after generation
///
/// # Performance:
/// Non-negativity is what keeps the random kernels' index arithmetic
/// in-bounds without a range check:
/// ```ignore
/// buf[(value % len) as usize]  // value >= 0, so the mod is in [0, len)
/// ```
pub type Elem = i32;

/// Accumulated sum - same width as `Elem`.
///
/// All accumulation is fixed-width wraparound (`wrapping_add`); overflow
/// is expected and intentional, never an error.
pub type Sum = i32;
