//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::CoreError;
use crate::multiplier::{Multiplier, ValidatedMultiplier};
use crate::naive::NaiveMultiplier;
use crate::strassen::StrassenEngine;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, CoreError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(name: &str) -> Result<Arc<dyn Multiplier>, CoreError> {
        match name {
            "strassen" => Ok(Arc::new(ValidatedMultiplier::new(Arc::new(
                StrassenEngine::new(),
            )))),
            "naive" | "standard" => Ok(Arc::new(ValidatedMultiplier::new(Arc::new(
                NaiveMultiplier::new(),
            )))),
            _ => Err(CoreError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, CoreError> {
        // Check cache first
        {
            let cache = self.cache.read();
            if let Some(m) = cache.get(name) {
                return Ok(Arc::clone(m));
            }
        }

        let m = Self::create_multiplier(name)?;
        self.cache
            .write()
            .entry(name.to_string())
            .or_insert_with(|| Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["strassen", "naive"]
    }
}
