//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{CoreError, Matrix};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a multiplication result.
    fn present_result(&self, algorithm: &str, result: &Matrix, duration: Duration, details: bool);

    /// Present a comparison of several multipliers.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Multiplier name.
    pub algorithm: String,
    /// The computed product or a structured error.
    pub outcome: Result<Matrix, CoreError>,
    /// Computation duration.
    pub duration: Duration,
}

impl MultiplicationResult {
    /// The product, if the multiplication succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&Matrix> {
        self.outcome.as_ref().ok()
    }
}
