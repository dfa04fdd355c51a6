//! Constants for engine thresholds and process exit codes.

/// Default order above which a recursion level forks its sub-products.
///
/// Levels at or below this order run their seven sub-products sequentially
/// on the current worker.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16;

/// Default order at or below which the naive kernel takes over.
///
/// 1 keeps pure Strassen recursion down to scalar products.
pub const DEFAULT_LEAF_ORDER: usize = 1;

/// Number of sub-products per Strassen level.
pub const SUB_PRODUCTS: usize = 7;

/// Exit codes for the `strassen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Multiplication timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Multiplier results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Operands rejected (bad payload, order or dimensions).
    pub const ERROR_INVALID_INPUT: i32 = 5;
    /// Multiplication cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
