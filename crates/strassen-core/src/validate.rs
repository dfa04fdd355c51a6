//! Order validation for multiplication operands.

use crate::error::CoreError;
use crate::matrix::Matrix;

/// True iff `n` is a positive power of two.
///
/// `n & (n - 1) == 0` alone also accepts zero, so zero is rejected first.
///
/// # Example
/// ```
/// use strassen_core::validate::is_power_of_two;
///
/// assert!(is_power_of_two(1));
/// assert!(is_power_of_two(64));
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(12));
/// ```
#[must_use]
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Check that a single matrix has a positive power-of-two order.
pub fn validate_order(m: &Matrix) -> Result<(), CoreError> {
    if is_power_of_two(m.order()) {
        Ok(())
    } else {
        Err(CoreError::InvalidOrder(m.order()))
    }
}

/// Check that `a` and `b` can be multiplied by the Strassen engine.
///
/// Order errors take precedence over a mismatch, left operand first.
pub fn validate_pair(a: &Matrix, b: &Matrix) -> Result<(), CoreError> {
    validate_order(a)?;
    validate_order(b)?;
    if a.order() != b.order() {
        return Err(CoreError::DimensionMismatch {
            left: a.order(),
            right: b.order(),
        });
    }
    Ok(())
}
