//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use strassen_core::{CoreError, Options, OverflowPolicy};

/// Parallel Strassen multiplication of power-of-two integer matrices.
///
/// Reads a JSON array of two `{"order": n, "data": [[...]]}` objects and
/// prints their product.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// JSON payload file, `-` for stdin.
    #[arg(short, long, default_value = "-", env = "STRASSEN_INPUT")]
    pub input: String,

    /// Algorithm to use: strassen, naive, or all.
    #[arg(long, default_value = "strassen", env = "STRASSEN_ALGO")]
    pub algo: String,

    /// Order at or below which recursion runs sequentially (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Order at or below which the naive kernel takes over (0 = default).
    #[arg(long, default_value = "0")]
    pub leaf_order: usize,

    /// Overflow policy: wrapping or checked.
    #[arg(long, default_value = "wrapping")]
    pub overflow: String,

    /// Worker threads for a dedicated pool (0 = global pool).
    #[arg(long, default_value = "0", env = "STRASSEN_THREADS")]
    pub threads: usize,

    /// Timeout duration (e.g., "500ms", "30s", "5m", "1h").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Print the response object as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON response to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout string into a `Duration`.
    pub fn timeout_duration(&self) -> Result<Duration, CoreError> {
        parse_duration(&self.timeout)
            .ok_or_else(|| CoreError::Config(format!("invalid timeout: {}", self.timeout)))
    }

    /// Engine options from the flags, normalized.
    pub fn options(&self) -> Result<Options, CoreError> {
        let overflow: OverflowPolicy = self.overflow.parse()?;
        Ok(Options {
            parallel_threshold: self.threshold,
            leaf_order: self.leaf_order,
            overflow,
            max_threads: self.threads,
        }
        .normalize())
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}
