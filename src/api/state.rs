//! Application state for the Construction Cost Estimating Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateSchedule;

/// Shared application state.
///
/// Holds the site rate schedule used when a request does not supply its
/// own rates.
#[derive(Clone)]
pub struct AppState {
    /// The default rate schedule.
    rates: Arc<RateSchedule>,
}

impl AppState {
    /// Creates a new application state with the given rate schedule.
    pub fn new(rates: RateSchedule) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the default rate schedule.
    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }
}
