//! Error type shared by every layer of the multiplier.

/// Error type for matrix multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A matrix order is not a positive power of two.
    #[error("invalid order {0}: must be a positive power of two")]
    InvalidOrder(usize),

    /// The two operands have different orders.
    #[error("dimension mismatch: left operand has order {left}, right operand has order {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A row does not have as many elements as the matrix has rows.
    #[error("malformed matrix: row {row} has {found} elements, expected {expected}")]
    Malformed {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// 64-bit overflow under the checked overflow policy.
    #[error("arithmetic overflow during {0}")]
    Overflow(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Multiplication was cancelled.
    #[error("multiplication cancelled")]
    Cancelled,

    /// Multiplication timed out.
    #[error("multiplication timed out after {0}")]
    Timeout(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,
}

impl CoreError {
    /// Whether this error comes from rejecting the operands rather than from running.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrder(_) | Self::DimensionMismatch { .. } | Self::Malformed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_display() {
        assert_eq!(
            CoreError::InvalidOrder(3).to_string(),
            "invalid order 3: must be a positive power of two"
        );
        assert_eq!(
            CoreError::DimensionMismatch { left: 4, right: 8 }.to_string(),
            "dimension mismatch: left operand has order 4, right operand has order 8"
        );
        assert_eq!(CoreError::Cancelled.to_string(), "multiplication cancelled");
    }

    #[test]
    fn invalid_input_classification() {
        assert!(CoreError::InvalidOrder(0).is_invalid_input());
        assert!(CoreError::DimensionMismatch { left: 2, right: 4 }.is_invalid_input());
        assert!(!CoreError::Overflow("addition").is_invalid_input());
        assert!(!CoreError::Cancelled.is_invalid_input());
    }
}
