//! # strassen-orchestration
//!
//! Multiplier selection, timed execution, and result cross-checking.

pub mod interfaces;
pub mod multiplier_selection;
pub mod orchestrator;

pub use interfaces::{MultiplicationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
