//! Quadrant decomposition and reassembly.
//!
//! Both directions copy into freshly allocated buffers. A quadrant never
//! borrows its parent's storage and `combine` never extends the storage of
//! one of its inputs, so siblings stay independent.

use crate::matrix::Matrix;

/// The four equal sub-matrices of an even-order matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    /// Top-left.
    pub a11: Matrix,
    /// Top-right.
    pub a12: Matrix,
    /// Bottom-left.
    pub a21: Matrix,
    /// Bottom-right.
    pub a22: Matrix,
}

/// Split `m` into its four quadrants.
///
/// `m` must have even order.
#[must_use]
pub fn split(m: &Matrix) -> Quadrants {
    let n = m.order();
    debug_assert!(n % 2 == 0, "split requires an even order, got {n}");
    let half = n / 2;

    let mut a11 = Vec::with_capacity(half * half);
    let mut a12 = Vec::with_capacity(half * half);
    let mut a21 = Vec::with_capacity(half * half);
    let mut a22 = Vec::with_capacity(half * half);

    for i in 0..half {
        let (left, right) = m.row(i).split_at(half);
        a11.extend_from_slice(left);
        a12.extend_from_slice(right);

        let (left, right) = m.row(i + half).split_at(half);
        a21.extend_from_slice(left);
        a22.extend_from_slice(right);
    }

    Quadrants {
        a11: Matrix::from_vec(half, a11),
        a12: Matrix::from_vec(half, a12),
        a21: Matrix::from_vec(half, a21),
        a22: Matrix::from_vec(half, a22),
    }
}

/// Reassemble four quadrants of equal order `m` into a matrix of order `2m`.
#[must_use]
pub fn combine(c11: &Matrix, c12: &Matrix, c21: &Matrix, c22: &Matrix) -> Matrix {
    let half = c11.order();
    debug_assert!(
        c12.order() == half && c21.order() == half && c22.order() == half,
        "combine requires quadrants of equal order"
    );
    let n = half * 2;

    let mut data = Vec::with_capacity(n * n);
    for i in 0..half {
        data.extend_from_slice(c11.row(i));
        data.extend_from_slice(c12.row(i));
    }
    for i in 0..half {
        data.extend_from_slice(c21.row(i));
        data.extend_from_slice(c22.row(i));
    }
    Matrix::from_vec(n, data)
}

impl From<Quadrants> for Matrix {
    fn from(q: Quadrants) -> Self {
        combine(&q.a11, &q.a12, &q.a21, &q.a22)
    }
}
