//! CLI result presenter.

use std::time::Duration;

use strassen_core::Matrix;
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_duration, format_matrix, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render a product the way `present_result` prints it.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        result: &Matrix,
        duration: Duration,
        details: bool,
    ) -> String {
        if self.quiet {
            return result.to_string();
        }

        let n = result.order();
        let mut lines = vec![
            format!("Algorithm: {algorithm}"),
            format!("Order: {n}"),
            format!("Duration: {}", format_duration(duration)),
        ];
        if details {
            let entries = u64::try_from(n * n).unwrap_or(u64::MAX);
            let max_abs = result
                .as_slice()
                .iter()
                .map(|v| v.unsigned_abs())
                .max()
                .unwrap_or(0);
            lines.push(format!("Entries: {}", format_number(entries)));
            lines.push(format!("Max |entry|: {}", format_number(max_abs)));
        }
        lines.push("Product:".to_string());
        lines.push(format_matrix(result, self.verbose));
        lines.join("\n")
    }

    /// Render the comparison table, or nothing in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[MultiplicationResult]) -> String {
        if self.quiet {
            return String::new();
        }

        let mut out = format!("\nComparison Results:\n{:-<60}", "");
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) => format!("ERROR: {e}"),
            };
            out.push_str(&format!(
                "\n  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            ));
        }
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, result: &Matrix, duration: Duration, details: bool) {
        println!("{}", self.render_result(algorithm, result, duration, details));
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if !self.quiet {
            println!("{}", self.render_comparison(results));
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
