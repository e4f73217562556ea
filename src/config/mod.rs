//! Rate configuration for the statutory cost breakdown.
//!
//! This module provides the typed rate schedule (one configurable percent
//! per surcharge key, with documented statutory defaults) and a loader for
//! reading a schedule from a YAML configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use estimate_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded {} rate keys", config.schedule().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateKey, RateSchedule};
