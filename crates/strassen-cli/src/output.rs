//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use tracing::debug;

use strassen_core::Matrix;

/// Largest order printed in full without `--verbose`.
pub const MAX_DISPLAY_ORDER: usize = 16;

/// Order of the top-left block shown when a product is truncated.
pub const PREVIEW_ORDER: usize = 8;

/// Format a matrix for display, truncating large ones unless `verbose`.
#[must_use]
pub fn format_matrix(m: &Matrix, verbose: bool) -> String {
    let n = m.order();
    if verbose || n <= MAX_DISPLAY_ORDER {
        return m.to_string();
    }
    let preview = Matrix::from_fn(PREVIEW_ORDER, |i, j| m[(i, j)]);
    format!(
        "{preview}\n... (top-left {PREVIEW_ORDER}x{PREVIEW_ORDER} of {n}x{n}, use --verbose for all)"
    )
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Write `contents` to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    writeln!(file)?;
    debug!(path, bytes = contents.len(), "wrote output file");
    Ok(())
}
