//! Multiplier selection logic.

use std::sync::Arc;

use strassen_core::registry::MultiplierFactory;
use strassen_core::{CoreError, Multiplier};

/// Get multipliers to run based on algorithm selection.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, CoreError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
