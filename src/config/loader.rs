//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate
//! schedule from a YAML configuration directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{RateKey, RateSchedule};

/// Loads and provides access to the site rate schedule.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/
/// └── rates.yaml   # surcharge key → percent
/// ```
///
/// The file is the complete schedule: keys it omits read as zero. Use
/// [`RateSchedule::standard`] when no site configuration exists.
///
/// # Example
///
/// ```no_run
/// use estimate_engine::config::{ConfigLoader, RateKey};
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let vat = loader.schedule().percent(RateKey::Vat);
/// println!("VAT: {}%", vat);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads the rate schedule from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if `rates.yaml`
    /// is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let schedule = Self::load_schedule(&rates_path)?;
        Ok(Self { schedule })
    }

    /// Loads and parses the rates file.
    fn load_schedule(path: &Path) -> EngineResult<RateSchedule> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let percents: HashMap<RateKey, Decimal> =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(RateSchedule::from_percents(percents))
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}
