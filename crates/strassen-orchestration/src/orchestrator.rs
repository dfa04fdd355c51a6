//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::info;

use strassen_core::{CancellationToken, CoreError, Matrix, Multiplier, Options};

use crate::interfaces::MultiplicationResult;

fn run_one(
    multiplier: &dyn Multiplier,
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    cancel: &CancellationToken,
) -> MultiplicationResult {
    let start = Instant::now();
    let outcome = multiplier.multiply(cancel, a, b, opts);
    let duration = start.elapsed();

    info!(
        algorithm = multiplier.name(),
        order = a.order(),
        ok = outcome.is_ok(),
        elapsed_ms = duration.as_millis(),
        "multiplication finished"
    );

    MultiplicationResult {
        algorithm: multiplier.name().to_string(),
        outcome,
        duration,
    }
}

/// Execute the multiplication `a * b` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run in parallel.
/// Results keep the order of `multipliers`.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    cancel: &CancellationToken,
) -> Vec<MultiplicationResult> {
    if let [single] = multipliers {
        return vec![run_one(single.as_ref(), a, b, opts, cancel)];
    }

    multipliers
        .par_iter()
        .map(|m| run_one(m.as_ref(), a, b, opts, cancel))
        .collect()
}

/// Analyze comparison results.
///
/// Every successful product must equal the first one, otherwise
/// [`CoreError::Mismatch`]. When nothing succeeded the first recorded
/// error is returned.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), CoreError> {
    let mut products = results.iter().filter_map(MultiplicationResult::product);

    let Some(first) = products.next() else {
        return Err(results
            .iter()
            .find_map(|r| r.outcome.as_ref().err().cloned())
            .unwrap_or_else(|| CoreError::Config("no multipliers were run".into())));
    };

    if products.any(|p| p != first) {
        return Err(CoreError::Mismatch);
    }
    Ok(())
}
