//! Multiplier traits and the `ValidatedMultiplier` decorator.
//!
//! `Multiplier` is the public trait consumed by orchestration.
//! `CoreMultiplier` is the internal trait implemented by algorithms; it may
//! assume both operands share a positive power-of-two order.
//! `ValidatedMultiplier` is a decorator that checks the operands and takes the
//! scalar fast path for order 1.

use std::sync::Arc;

use crate::error::CoreError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::progress::CancellationToken;
use crate::validate::validate_pair;

/// Public trait for matrix multipliers, consumed by orchestration.
pub trait Multiplier: Send + Sync {
    /// Compute `a * b` with the given options.
    fn multiply(
        &self,
        cancel: &CancellationToken,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, CoreError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `ValidatedMultiplier` which adds validation and the fast path.
pub trait CoreMultiplier: Send + Sync {
    /// Multiply two operands whose orders are equal powers of two.
    fn multiply_core(
        &self,
        cancel: &CancellationToken,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, CoreError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreMultiplier` with operand validation.
pub struct ValidatedMultiplier {
    inner: Arc<dyn CoreMultiplier>,
}

impl ValidatedMultiplier {
    /// Create a new `ValidatedMultiplier` wrapping the given core multiplier.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreMultiplier>) -> Self {
        Self { inner }
    }

    /// Fast path for 1x1 operands.
    fn multiply_scalar(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, CoreError> {
        let product = opts.overflow.mul(a.as_slice()[0], b.as_slice()[0])?;
        Ok(Matrix::from_vec(1, vec![product]))
    }
}

impl Multiplier for ValidatedMultiplier {
    fn multiply(
        &self,
        cancel: &CancellationToken,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, CoreError> {
        // Rejected operands never reach the algorithm.
        validate_pair(a, b)?;

        cancel.check_cancelled()?;

        if a.order() == 1 {
            return Self::multiply_scalar(a, b, opts);
        }

        self.inner.multiply_core(cancel, a, b, opts)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::OverflowPolicy;
    use parking_lot::Mutex;

    /// Records every call so tests can see whether validation let it through.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<usize>>,
    }

    impl CoreMultiplier for Recording {
        fn multiply_core(
            &self,
            _cancel: &CancellationToken,
            a: &Matrix,
            _b: &Matrix,
            _opts: &Options,
        ) -> Result<Matrix, CoreError> {
            self.calls.lock().push(a.order());
            Ok(Matrix::zeros(a.order()))
        }

        fn name(&self) -> &'static str {
            "Recording"
        }
    }

    fn wrap() -> (Arc<Recording>, ValidatedMultiplier) {
        let inner = Arc::new(Recording::default());
        let outer = ValidatedMultiplier::new(inner.clone());
        (inner, outer)
    }

    #[test]
    fn invalid_order_never_reaches_core() {
        let (inner, outer) = wrap();
        let a = Matrix::zeros(3);
        let result = outer.multiply(&CancellationToken::new(), &a, &a, &Options::default());
        assert_eq!(result, Err(CoreError::InvalidOrder(3)));
        assert!(inner.calls.lock().is_empty());
    }

    #[test]
    fn mismatch_never_reaches_core() {
        let (inner, outer) = wrap();
        let result = outer.multiply(
            &CancellationToken::new(),
            &Matrix::zeros(4),
            &Matrix::zeros(8),
            &Options::default(),
        );
        assert_eq!(result, Err(CoreError::DimensionMismatch { left: 4, right: 8 }));
        assert!(inner.calls.lock().is_empty());
    }

    #[test]
    fn valid_operands_delegate() {
        let (inner, outer) = wrap();
        let a = Matrix::identity(4);
        let result = outer.multiply(&CancellationToken::new(), &a, &a, &Options::default());
        assert!(result.is_ok());
        assert_eq!(*inner.calls.lock(), vec![4]);
        assert_eq!(outer.name(), "Recording");
    }

    #[test]
    fn scalar_fast_path() {
        let (inner, outer) = wrap();
        let a = Matrix::from_rows(vec![vec![-6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7]]).unwrap();
        let c = outer
            .multiply(&CancellationToken::new(), &a, &b, &Options::default())
            .unwrap();
        assert_eq!(c.as_slice(), &[-42]);
        assert!(inner.calls.lock().is_empty());
    }

    #[test]
    fn scalar_fast_path_checked_overflow() {
        let (_, outer) = wrap();
        let a = Matrix::from_rows(vec![vec![i64::MAX]]).unwrap();
        let opts = Options {
            overflow: OverflowPolicy::Checked,
            ..Options::default()
        };
        let result = outer.multiply(&CancellationToken::new(), &a, &a, &opts);
        assert!(matches!(result, Err(CoreError::Overflow(_))));
    }

    #[test]
    fn cancelled_before_start() {
        let (inner, outer) = wrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let a = Matrix::identity(2);
        let result = outer.multiply(&cancel, &a, &a, &Options::default());
        assert_eq!(result, Err(CoreError::Cancelled));
        assert!(inner.calls.lock().is_empty());
    }

    #[test]
    fn cancelled_scalar_skips_fast_path() {
        let (_, outer) = wrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let a = Matrix::identity(1);
        let result = outer.multiply(&cancel, &a, &a, &Options::default());
        assert_eq!(result, Err(CoreError::Cancelled));
    }

    #[test]
    fn expired_deadline_times_out_scalar() {
        let (_, outer) = wrap();
        let cancel = CancellationToken::with_timeout(std::time::Duration::ZERO);
        let a = Matrix::identity(1);
        let result = outer.multiply(&cancel, &a, &a, &Options::default());
        assert!(matches!(result, Err(CoreError::Timeout(_))));
    }
}
