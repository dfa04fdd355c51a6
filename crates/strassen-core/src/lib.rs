//! # strassen-core
//!
//! Core library for strassen-rs: parallel Strassen multiplication of square
//! `i64` matrices whose order is a power of two, plus the naive reference
//! kernel, order validation and the multiplier registry.

pub mod arith;
pub mod common;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod naive;
pub mod options;
pub mod progress;
pub mod quadrants;
pub mod registry;
pub mod strassen;
pub mod validate;

// Re-exports
pub use arith::OverflowPolicy;
pub use constants::{exit_codes, DEFAULT_LEAF_ORDER, DEFAULT_PARALLEL_THRESHOLD};
pub use error::CoreError;
pub use matrix::Matrix;
pub use multiplier::{CoreMultiplier, Multiplier, ValidatedMultiplier};
pub use options::Options;
pub use progress::CancellationToken;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::StrassenEngine;

/// Multiply `a` by `b` with Strassen's method and default options.
///
/// Operands are validated first: both orders must be the same positive
/// power of two. For cancellation, thresholds or the overflow policy, use
/// the `Multiplier` trait directly.
///
/// # Example
/// ```
/// use strassen_core::{multiply, CoreError, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// assert_eq!(multiply(&a, &b).unwrap().to_rows(), vec![vec![19, 22], vec![43, 50]]);
///
/// let c = Matrix::zeros(3);
/// assert_eq!(multiply(&c, &c), Err(CoreError::InvalidOrder(3)));
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
    let multiplier = ValidatedMultiplier::new(std::sync::Arc::new(StrassenEngine::new()));
    multiplier.multiply(&CancellationToken::new(), a, b, &Options::default())
}
