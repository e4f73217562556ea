//! Statutory cost breakdown models.
//!
//! The breakdown is a fixed, ordered chain of named totals. Every line
//! carries a formula description expressed over earlier step keys so that
//! an external exporter can regenerate equivalent spreadsheet formulas;
//! the chain order and step set are a compatibility contract and must not
//! be collapsed or reordered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Names every total in the statutory breakdown chain, in chain order.
///
/// # Example
///
/// ```
/// use estimate_engine::models::StepKey;
///
/// assert_eq!(StepKey::FinalTotal.label(), "Contract total");
/// assert_eq!(
///     serde_json::to_string(&StepKey::IndirectLabor).unwrap(),
///     "\"indirect_labor\""
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    /// Direct material cost from the aggregation.
    DirectMaterial,
    /// Direct labor cost from the aggregation.
    DirectLabor,
    /// Indirect labor surcharge on direct labor.
    IndirectLabor,
    /// Direct plus indirect labor.
    TotalLabor,
    /// Direct expense cost from the aggregation.
    DirectExpense,
    /// Employment insurance surcharge.
    EmploymentIns,
    /// National health insurance surcharge.
    HealthIns,
    /// National pension surcharge.
    Pension,
    /// Long-term senior care insurance surcharge (based on the floored
    /// health insurance amount).
    SeniorCare,
    /// Industrial safety and health management levy.
    SafetyMgmt,
    /// Miscellaneous site expenses.
    OtherExpense,
    /// Direct expense plus all surcharges.
    TotalExpense,
    /// Material + total labor + total expense.
    PureCost,
    /// General administration surcharge on pure cost.
    GenAdmin,
    /// Pure cost plus general administration.
    TotalCost,
    /// Profit (material excluded from the base).
    Profit,
    /// Total cost plus profit.
    SupplyPrice,
    /// Value-added tax on the supply price.
    Vat,
    /// Supply price plus VAT — the contract total.
    FinalTotal,
}

impl StepKey {
    /// Every step key in chain order.
    pub const CHAIN: [StepKey; 19] = [
        StepKey::DirectMaterial,
        StepKey::DirectLabor,
        StepKey::IndirectLabor,
        StepKey::TotalLabor,
        StepKey::DirectExpense,
        StepKey::EmploymentIns,
        StepKey::HealthIns,
        StepKey::Pension,
        StepKey::SeniorCare,
        StepKey::SafetyMgmt,
        StepKey::OtherExpense,
        StepKey::TotalExpense,
        StepKey::PureCost,
        StepKey::GenAdmin,
        StepKey::TotalCost,
        StepKey::Profit,
        StepKey::SupplyPrice,
        StepKey::Vat,
        StepKey::FinalTotal,
    ];

    /// Returns the display label for the step.
    pub fn label(&self) -> &'static str {
        match self {
            StepKey::DirectMaterial => "Direct material cost",
            StepKey::DirectLabor => "Direct labor cost",
            StepKey::IndirectLabor => "Indirect labor cost",
            StepKey::TotalLabor => "Total labor cost",
            StepKey::DirectExpense => "Direct expense",
            StepKey::EmploymentIns => "Employment insurance",
            StepKey::HealthIns => "National health insurance",
            StepKey::Pension => "National pension",
            StepKey::SeniorCare => "Long-term senior care insurance",
            StepKey::SafetyMgmt => "Industrial safety management levy",
            StepKey::OtherExpense => "Miscellaneous expenses",
            StepKey::TotalExpense => "Total expense",
            StepKey::PureCost => "Pure construction cost",
            StepKey::GenAdmin => "General administration",
            StepKey::TotalCost => "Total cost",
            StepKey::Profit => "Profit",
            StepKey::SupplyPrice => "Supply price",
            StepKey::Vat => "Value-added tax",
            StepKey::FinalTotal => "Contract total",
        }
    }
}

/// One line of the statutory breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The named total this line carries.
    pub key: StepKey,
    /// Display label for the line.
    pub label: String,
    /// Deterministic formula text over earlier step keys, consumed by the
    /// spreadsheet exporter.
    pub formula: String,
    /// The configured percent applied, for rate-derived lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// The computed amount (floored to the whole currency unit for every
    /// rate-derived line).
    pub amount: Decimal,
}

/// The complete ordered statutory breakdown, ending in the contract total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The chain lines in fixed order.
    pub lines: Vec<BreakdownLine>,
}

impl CostBreakdown {
    /// Returns the amount for a given step, if present.
    pub fn amount(&self, key: StepKey) -> Option<Decimal> {
        self.lines.iter().find(|l| l.key == key).map(|l| l.amount)
    }

    /// Returns the contract total (the last line of the chain).
    ///
    /// Zero for an empty breakdown, which never occurs for engine output.
    pub fn final_total(&self) -> Decimal {
        self.amount(StepKey::FinalTotal).unwrap_or(Decimal::ZERO)
    }
}
