//! Multiplication options and configuration.

use crate::arith::OverflowPolicy;
use crate::constants::{DEFAULT_LEAF_ORDER, DEFAULT_PARALLEL_THRESHOLD};

/// Options for matrix multiplication.
#[derive(Debug, Clone)]
pub struct Options {
    /// Order above which a Strassen level forks its sub-products in parallel.
    pub parallel_threshold: usize,
    /// Order at or below which the naive kernel replaces recursion.
    pub leaf_order: usize,
    /// Overflow handling for every element operation.
    pub overflow: OverflowPolicy,
    /// Size of a dedicated worker pool (0 = rayon global pool).
    pub max_threads: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            leaf_order: DEFAULT_LEAF_ORDER,
            overflow: OverflowPolicy::default(),
            max_threads: 0,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.leaf_order == 0 {
            self.leaf_order = DEFAULT_LEAF_ORDER;
        }
        self
    }
}
