//! Rate schedule types.
//!
//! The breakdown chain derives one surcharge per [`RateKey`]; the
//! [`RateSchedule`] maps each key to a user-editable percent. Keys absent
//! from a schedule read as zero, so a partially configured schedule still
//! produces a full, deterministic chain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The ten configurable surcharge keys of the statutory breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKey {
    /// Indirect labor, as a percent of direct labor.
    IndirectLabor,
    /// Employment insurance, as a percent of direct labor.
    EmploymentIns,
    /// National health insurance, as a percent of direct labor.
    HealthIns,
    /// National pension, as a percent of direct labor.
    Pension,
    /// Long-term senior care insurance, as a percent of the floored
    /// health insurance amount.
    SeniorCare,
    /// Industrial safety management levy, as a percent of direct
    /// material plus direct labor.
    SafetyMgmt,
    /// Miscellaneous expenses, as a percent of direct material plus
    /// total labor.
    OtherExpense,
    /// General administration, as a percent of pure cost.
    GenAdmin,
    /// Profit, as a percent of total labor plus total expense plus
    /// general administration.
    Profit,
    /// Value-added tax, as a percent of the supply price.
    Vat,
}

impl RateKey {
    /// Every configurable rate key.
    pub const ALL: [RateKey; 10] = [
        RateKey::IndirectLabor,
        RateKey::EmploymentIns,
        RateKey::HealthIns,
        RateKey::Pension,
        RateKey::SeniorCare,
        RateKey::SafetyMgmt,
        RateKey::OtherExpense,
        RateKey::GenAdmin,
        RateKey::Profit,
        RateKey::Vat,
    ];
}

/// User-editable percent per surcharge key.
///
/// [`RateSchedule::standard`] supplies the 2025 statutory reference
/// values; sites adjust individual keys with [`RateSchedule::set_percent`].
/// Missing keys read as zero.
///
/// # Example
///
/// ```
/// use estimate_engine::config::{RateKey, RateSchedule};
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::standard();
/// assert_eq!(
///     schedule.percent(RateKey::IndirectLabor),
///     Decimal::new(145, 1)
/// );
///
/// let empty = RateSchedule::empty();
/// assert_eq!(empty.percent(RateKey::Vat), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateSchedule {
    percents: HashMap<RateKey, Decimal>,
}

impl RateSchedule {
    /// The 2025 statutory reference schedule.
    ///
    /// | key | percent |
    /// |---|---|
    /// | indirect_labor | 14.5 |
    /// | employment_ins | 1.15 |
    /// | health_ins | 3.545 |
    /// | pension | 4.5 |
    /// | senior_care | 12.95 |
    /// | safety_mgmt | 1.81 |
    /// | other_expense | 5.5 |
    /// | gen_admin | 5.0 |
    /// | profit | 10.0 |
    /// | vat | 10.0 |
    pub fn standard() -> Self {
        let mut percents = HashMap::new();
        percents.insert(RateKey::IndirectLabor, Decimal::new(145, 1));
        percents.insert(RateKey::EmploymentIns, Decimal::new(115, 2));
        percents.insert(RateKey::HealthIns, Decimal::new(3545, 3));
        percents.insert(RateKey::Pension, Decimal::new(45, 1));
        percents.insert(RateKey::SeniorCare, Decimal::new(1295, 2));
        percents.insert(RateKey::SafetyMgmt, Decimal::new(181, 2));
        percents.insert(RateKey::OtherExpense, Decimal::new(55, 1));
        percents.insert(RateKey::GenAdmin, Decimal::new(50, 1));
        percents.insert(RateKey::Profit, Decimal::new(100, 1));
        percents.insert(RateKey::Vat, Decimal::new(100, 1));
        Self { percents }
    }

    /// A schedule with no configured keys; every percent reads as zero.
    pub fn empty() -> Self {
        Self {
            percents: HashMap::new(),
        }
    }

    /// Builds a schedule from an explicit key → percent map.
    pub fn from_percents(percents: HashMap<RateKey, Decimal>) -> Self {
        Self { percents }
    }

    /// Returns the configured percent for a key, zero when absent.
    pub fn percent(&self, key: RateKey) -> Decimal {
        self.percents.get(&key).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns the multiplier form of a percent (percent / 100).
    pub fn multiplier(&self, key: RateKey) -> Decimal {
        self.percent(key) / Decimal::ONE_HUNDRED
    }

    /// Replaces the percent for one key.
    pub fn set_percent(&mut self, key: RateKey, percent: Decimal) {
        self.percents.insert(key, percent);
    }

    /// Returns the number of configured keys.
    pub fn len(&self) -> usize {
        self.percents.len()
    }

    /// Returns true when no key is configured.
    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
