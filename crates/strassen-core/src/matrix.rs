//! Square row-major matrix of `i64` values.
//!
//! A `Matrix` owns a single contiguous buffer of `order * order` elements.
//! Every constructor allocates, so two live matrices never share storage;
//! quadrants and combined results are always fresh copies.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Square matrix of signed 64-bit integers, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    order: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from its rows.
    ///
    /// Every row must have exactly as many elements as there are rows.
    /// An empty `rows` yields the order-0 matrix.
    ///
    /// # Example
    /// ```
    /// use strassen_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.order(), 2);
    /// assert_eq!(m[(1, 0)], 3);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, CoreError> {
        let order = rows.len();
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != order) {
            return Err(CoreError::Malformed {
                row,
                expected: order,
                found: values.len(),
            });
        }
        // Every row is now known to hold `order` elements.
        let mut data = Vec::with_capacity(order * order);
        for values in rows {
            data.extend(values);
        }
        Ok(Self { order, data })
    }

    /// Build a matrix of the given order from a row-major buffer.
    pub(crate) fn from_vec(order: usize, data: Vec<i64>) -> Self {
        debug_assert_eq!(data.len(), order * order);
        Self { order, data }
    }

    /// Build a matrix by evaluating `f(row, col)` for every element.
    #[must_use]
    pub fn from_fn(order: usize, mut f: impl FnMut(usize, usize) -> i64) -> Self {
        let mut data = Vec::with_capacity(order * order);
        for i in 0..order {
            for j in 0..order {
                data.push(f(i, j));
            }
        }
        Self { order, data }
    }

    /// The all-zero matrix.
    #[must_use]
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            data: vec![0; order * order],
        }
    }

    /// The identity matrix.
    #[must_use]
    pub fn identity(order: usize) -> Self {
        Self::from_fn(order, |i, j| i64::from(i == j))
    }

    /// Side length.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.order;
        &self.data[start..start + self.order]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        // chunks_exact(0) panics; the empty matrix has no rows anyway.
        self.data.chunks_exact(self.order.max(1))
    }

    /// Row-major element buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Copy into a vector of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        assert!(
            row < self.order && col < self.order,
            "index ({row}, {col}) out of range for order {}",
            self.order
        );
        &self.data[row * self.order + col]
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v:>width$}")?;
            }
        }
        Ok(())
    }
}
