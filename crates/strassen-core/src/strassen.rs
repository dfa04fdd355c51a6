//! Parallel Strassen multiplication.
//!
//! Each level splits both operands into quadrants, forms the seven operand
//! pairs, multiplies them recursively and recombines:
//!
//! ```text
//! M1 = (A11 + A22)(B11 + B22)      C11 = ((M1 + M4) - M5) + M7
//! M2 = (A21 + A22) B11              C12 = M3 + M5
//! M3 = A11 (B12 - B22)              C21 = M2 + M4
//! M4 = A22 (B21 - B11)              C22 = ((M1 + M3) - M2) + M6
//! M5 = (A11 + A12) B22
//! M6 = (A21 - A11)(B11 + B12)
//! M7 = (A12 - A22)(B21 + B22)
//! ```
//!
//! Levels above `Options::parallel_threshold` run the seven products as rayon
//! tasks and join on all of them before combining. The first failing task
//! stops its siblings at their next recursion entry.

use std::borrow::Cow;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::arith::OverflowPolicy;
use crate::common::{run_in_pool, FirstError};
use crate::constants::SUB_PRODUCTS;
use crate::error::CoreError;
use crate::matrix::Matrix;
use crate::multiplier::CoreMultiplier;
use crate::naive::naive_multiply;
use crate::options::Options;
use crate::progress::CancellationToken;
use crate::quadrants::{combine, split, Quadrants};

/// One of the seven Strassen sub-products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubProduct {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
}

impl SubProduct {
    const ALL: [Self; SUB_PRODUCTS] = [
        Self::M1,
        Self::M2,
        Self::M3,
        Self::M4,
        Self::M5,
        Self::M6,
        Self::M7,
    ];

    /// Left and right operands of this sub-product.
    ///
    /// Quadrants used as-is are borrowed; sums and differences are fresh.
    fn operands<'q>(
        self,
        a: &'q Quadrants,
        b: &'q Quadrants,
        p: OverflowPolicy,
    ) -> Result<(Cow<'q, Matrix>, Cow<'q, Matrix>), CoreError> {
        Ok(match self {
            Self::M1 => (owned(p.add(&a.a11, &a.a22))?, owned(p.add(&b.a11, &b.a22))?),
            Self::M2 => (owned(p.add(&a.a21, &a.a22))?, Cow::Borrowed(&b.a11)),
            Self::M3 => (Cow::Borrowed(&a.a11), owned(p.subtract(&b.a12, &b.a22))?),
            Self::M4 => (Cow::Borrowed(&a.a22), owned(p.subtract(&b.a21, &b.a11))?),
            Self::M5 => (owned(p.add(&a.a11, &a.a12))?, Cow::Borrowed(&b.a22)),
            Self::M6 => (
                owned(p.subtract(&a.a21, &a.a11))?,
                owned(p.add(&b.a11, &b.a12))?,
            ),
            Self::M7 => (
                owned(p.subtract(&a.a12, &a.a22))?,
                owned(p.add(&b.a21, &b.a22))?,
            ),
        })
    }
}

fn owned<'q>(m: Result<Matrix, CoreError>) -> Result<Cow<'q, Matrix>, CoreError> {
    m.map(Cow::Owned)
}

/// State shared by every task of one top-level multiplication.
struct Context<'a> {
    cancel: &'a CancellationToken,
    opts: &'a Options,
    errors: &'a FirstError,
}

impl Context<'_> {
    /// Bail out if the caller cancelled or a sibling task already failed.
    fn checkpoint(&self) -> Result<(), CoreError> {
        if self.errors.has_failed() {
            return Err(CoreError::Cancelled);
        }
        self.cancel.check_cancelled()
    }

    fn product(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
        self.checkpoint()?;
        self.product_unchecked(a, b)
            .inspect_err(|e| self.errors.record(e))
    }

    fn product_unchecked(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
        let n = a.order();
        let policy = self.opts.overflow;

        if n == 1 {
            let scalar = policy.mul(a.as_slice()[0], b.as_slice()[0])?;
            return Ok(Matrix::from_vec(1, vec![scalar]));
        }
        if n <= self.opts.leaf_order {
            return naive_multiply(a, b, policy);
        }

        let qa = split(a);
        let qb = split(b);

        let products: Vec<Matrix> = if n > self.opts.parallel_threshold {
            trace!(order = n, "forking sub-products");
            SubProduct::ALL[..]
                .par_iter()
                .map(|&sp| self.sub_product(sp, &qa, &qb))
                .collect::<Result<_, _>>()?
        } else {
            SubProduct::ALL
                .iter()
                .map(|&sp| self.sub_product(sp, &qa, &qb))
                .collect::<Result<_, _>>()?
        };

        let [m1, m2, m3, m4, m5, m6, m7] = products.as_slice() else {
            unreachable!("one product per SubProduct");
        };

        let c11 = policy.add(&policy.subtract(&policy.add(m1, m4)?, m5)?, m7)?;
        let c12 = policy.add(m3, m5)?;
        let c21 = policy.add(m2, m4)?;
        let c22 = policy.add(&policy.subtract(&policy.add(m1, m3)?, m2)?, m6)?;

        Ok(combine(&c11, &c12, &c21, &c22))
    }

    fn sub_product(
        &self,
        sp: SubProduct,
        a: &Quadrants,
        b: &Quadrants,
    ) -> Result<Matrix, CoreError> {
        let (lhs, rhs) = sp
            .operands(a, b, self.opts.overflow)
            .inspect_err(|e| self.errors.record(e))?;
        self.product(&lhs, &rhs)
    }
}

/// Strassen multiplier.
pub struct StrassenEngine;

impl StrassenEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Multiply two operands of equal power-of-two order.
    ///
    /// Callers must validate the operands first (see
    /// [`validate_pair`](crate::validate::validate_pair)); the recursion
    /// relies on every level having an even order down to 1.
    pub fn multiply(
        &self,
        cancel: &CancellationToken,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, CoreError> {
        debug_assert!(crate::validate::validate_pair(a, b).is_ok());

        let opts = opts.clone().normalize();
        debug!(
            order = a.order(),
            parallel_threshold = opts.parallel_threshold,
            leaf_order = opts.leaf_order,
            overflow = %opts.overflow,
            threads = opts.max_threads,
            "Strassen multiply"
        );

        let errors = FirstError::new();
        let ctx = Context {
            cancel,
            opts: &opts,
            errors: &errors,
        };
        let result = run_in_pool(opts.max_threads, || ctx.product(a, b));

        // Report the error that stopped the tree, not a sibling's Cancelled.
        result.map_err(|e| errors.into_first(e))
    }
}

impl Default for StrassenEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for StrassenEngine {
    fn multiply_core(
        &self,
        cancel: &CancellationToken,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, CoreError> {
        self.multiply(cancel, a, b, opts)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
