//! Elementwise matrix arithmetic and the overflow policy.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::matrix::Matrix;

/// How 64-bit overflow is handled in every add, subtract and multiply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Two's-complement wrapping. The product is exact modulo 2^64.
    #[default]
    Wrapping,
    /// Fail with `CoreError::Overflow` on the first overflowing operation.
    Checked,
}

impl OverflowPolicy {
    /// Elementwise sum under this policy.
    pub fn add(self, a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
        match self {
            Self::Wrapping => Ok(add(a, b)),
            Self::Checked => checked_add(a, b),
        }
    }

    /// Elementwise difference under this policy.
    pub fn subtract(self, a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
        match self {
            Self::Wrapping => Ok(subtract(a, b)),
            Self::Checked => checked_subtract(a, b),
        }
    }

    /// Scalar product under this policy.
    #[inline]
    pub fn mul(self, a: i64, b: i64) -> Result<i64, CoreError> {
        match self {
            Self::Wrapping => Ok(a.wrapping_mul(b)),
            Self::Checked => a
                .checked_mul(b)
                .ok_or(CoreError::Overflow("multiplication")),
        }
    }

    /// Scalar `acc + a * b` under this policy.
    #[inline]
    pub fn mul_add(self, acc: i64, a: i64, b: i64) -> Result<i64, CoreError> {
        match self {
            Self::Wrapping => Ok(acc.wrapping_add(a.wrapping_mul(b))),
            Self::Checked => a
                .checked_mul(b)
                .and_then(|p| acc.checked_add(p))
                .ok_or(CoreError::Overflow("multiply-accumulate")),
        }
    }

    /// Policy name as accepted by `FromStr`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrapping => "wrapping",
            Self::Checked => "checked",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapping" | "wrap" => Ok(Self::Wrapping),
            "checked" | "check" => Ok(Self::Checked),
            other => Err(CoreError::Config(format!("unknown overflow policy: {other}"))),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn zip_with(a: &Matrix, b: &Matrix, op: impl Fn(i64, i64) -> i64) -> Matrix {
    debug_assert_eq!(a.order(), b.order(), "operands must have equal order");
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Matrix::from_vec(a.order(), data)
}

fn try_zip_with(
    a: &Matrix,
    b: &Matrix,
    op: impl Fn(i64, i64) -> Option<i64>,
    what: &'static str,
) -> Result<Matrix, CoreError> {
    debug_assert_eq!(a.order(), b.order(), "operands must have equal order");
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y).ok_or(CoreError::Overflow(what)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Matrix::from_vec(a.order(), data))
}

/// `C[i][j] = A[i][j] + B[i][j]`, wrapping on overflow.
#[must_use]
pub fn add(a: &Matrix, b: &Matrix) -> Matrix {
    zip_with(a, b, i64::wrapping_add)
}

/// `C[i][j] = A[i][j] - B[i][j]`, wrapping on overflow.
#[must_use]
pub fn subtract(a: &Matrix, b: &Matrix) -> Matrix {
    zip_with(a, b, i64::wrapping_sub)
}

/// Elementwise sum that fails on the first overflowing element.
pub fn checked_add(a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
    try_zip_with(a, b, i64::checked_add, "addition")
}

/// Elementwise difference that fails on the first overflowing element.
pub fn checked_subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
    try_zip_with(a, b, i64::checked_sub, "subtraction")
}
