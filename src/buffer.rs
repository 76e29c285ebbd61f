//! Shared benchmark buffer
//!
//! One buffer is generated at startup and shared read-only by every
//! kernel and runner for the whole run.

use crate::core_types::Elem;
use crate::rng::Lcg;

/// Fixed-length sequence of non-negative 32-bit integers.
///
/// Invariants, enforced at construction and relied on by the kernels:
/// - length >= 1 (the random kernels take `value % len`)
/// - length fits in `Elem`
/// - every element is non-negative, so `value % len` is in `[0, len)`
///
/// The buffer is never mutated after construction, which is why kernels
/// may read it concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct Buffer {
    values: Vec<Elem>,
}

impl Buffer {
    /// Generate a buffer of `len` pseudo-random values drawn from the
    /// source's native non-negative range.
    pub fn generate(len: usize, rng: &mut Lcg) -> Self {
        assert!(len >= 1, "buffer length must be at least 1");
        assert!(
            len <= Elem::MAX as usize,
            "buffer length must fit in a 32-bit element"
        );

        let values = (0..len).map(|_| rng.next_value()).collect();
        Self { values }
    }

    /// Build a buffer from explicit values, validating the invariants.
    ///
    /// Intended for tests and fixed scenarios.
    pub fn from_values(values: Vec<Elem>) -> Self {
        assert!(!values.is_empty(), "buffer length must be at least 1");
        assert!(
            values.len() <= Elem::MAX as usize,
            "buffer length must fit in a 32-bit element"
        );
        assert!(
            values.iter().all(|&v| v >= 0),
            "buffer elements must be non-negative"
        );

        Self { values }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: length >= 1 is a construction invariant.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the elements.
    pub fn as_slice(&self) -> &[Elem] {
        &self.values
    }
}
