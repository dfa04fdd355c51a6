//! Conventional O(n³) multiplication.
//!
//! Serves as the leaf kernel of the Strassen engine and as the reference
//! the engine is checked against.

use crate::arith::OverflowPolicy;
use crate::error::CoreError;
use crate::matrix::Matrix;
use crate::multiplier::CoreMultiplier;
use crate::options::Options;
use crate::progress::CancellationToken;

/// `C[i][j] = Σ_k A[i][k] * B[k][j]` under the given overflow policy.
///
/// Loops run i-k-j so the inner loop walks both `B` and `C` row-wise.
pub fn naive_multiply(a: &Matrix, b: &Matrix, policy: OverflowPolicy) -> Result<Matrix, CoreError> {
    debug_assert_eq!(a.order(), b.order(), "operands must have equal order");
    let n = a.order();
    let mut out = vec![0i64; n * n];

    for i in 0..n {
        let row = &mut out[i * n..(i + 1) * n];
        for (k, &aik) in a.row(i).iter().enumerate() {
            if aik == 0 {
                continue;
            }
            for (c, &bkj) in row.iter_mut().zip(b.row(k)) {
                *c = policy.mul_add(*c, aik, bkj)?;
            }
        }
    }

    Ok(Matrix::from_vec(n, out))
}

/// The conventional algorithm exposed as a multiplier.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for NaiveMultiplier {
    fn multiply_core(
        &self,
        cancel: &CancellationToken,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, CoreError> {
        cancel.check_cancelled()?;
        naive_multiply(a, b, opts.overflow)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
