//! JSON wire format for operands and responses.
//!
//! A request is an array of exactly two tagged matrices:
//!
//! ```json
//! [{"order": 2, "data": [[1, 2], [3, 4]]}, {"order": 2, "data": [[5, 6], [7, 8]]}]
//! ```
//!
//! A response carries either `data` or `error`.

use serde::{Deserialize, Serialize};

use strassen_core::{CoreError, Matrix};

/// A matrix tagged with its declared order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMatrix {
    /// Declared side length.
    pub order: i64,
    /// Row-major entries.
    pub data: Vec<Vec<i64>>,
}

/// Payload decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Not valid JSON, or not an array of tagged matrices.
    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    /// The array does not hold exactly two matrices.
    #[error("two matrices required, found {0}")]
    Count(usize),

    /// A declared order is negative.
    #[error("matrix {index}: negative order {order}")]
    NegativeOrder { index: usize, order: i64 },

    /// A declared order differs from the number of rows supplied.
    #[error("matrix {index}: declared order {declared} but {rows} rows supplied")]
    DeclaredOrder {
        index: usize,
        declared: i64,
        rows: usize,
    },

    /// The rows do not form a square matrix.
    #[error("matrix {index}: {source}")]
    Matrix {
        index: usize,
        #[source]
        source: CoreError,
    },
}

impl JsonMatrix {
    fn into_matrix(self, index: usize) -> Result<Matrix, PayloadError> {
        if self.order < 0 {
            return Err(PayloadError::NegativeOrder {
                index,
                order: self.order,
            });
        }
        let rows = self.data.len();
        if usize::try_from(self.order).ok() != Some(rows) {
            return Err(PayloadError::DeclaredOrder {
                index,
                declared: self.order,
                rows,
            });
        }
        Matrix::from_rows(self.data).map_err(|source| PayloadError::Matrix { index, source })
    }
}

impl From<&Matrix> for JsonMatrix {
    fn from(m: &Matrix) -> Self {
        Self {
            order: i64::try_from(m.order()).unwrap_or(i64::MAX),
            data: m.to_rows(),
        }
    }
}

/// Decode a request body into the two operands.
///
/// Orders are only checked for consistency here; power-of-two and
/// equal-order checks belong to the multiplier.
pub fn decode(body: &[u8]) -> Result<(Matrix, Matrix), PayloadError> {
    let matrices: Vec<JsonMatrix> = serde_json::from_slice(body)?;
    let [a, b]: [JsonMatrix; 2] = matrices
        .try_into()
        .map_err(|v: Vec<JsonMatrix>| PayloadError::Count(v.len()))?;
    Ok((a.into_matrix(0)?, b.into_matrix(1)?))
}

/// Encode two operands as a request body.
pub fn encode(a: &Matrix, b: &Matrix) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(&[JsonMatrix::from(a), JsonMatrix::from(b)])?)
}

/// Response object: the product or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Matrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    #[must_use]
    pub fn product(m: Matrix) -> Self {
        Self {
            data: Some(m),
            error: None,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}
