//! Direct cost aggregation results.
//!
//! These types capture the output of the bill-of-quantities fold: one
//! record per category scope plus the grand material/labor/expense totals
//! that feed the statutory breakdown. No flooring happens at this stage;
//! the per-category totals sum exactly to the grand totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated costs for one category scope.
///
/// The component fields are the scope subtotal already multiplied by the
/// category quantity; `total` is their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category entry's identifier.
    pub id: String,
    /// The category name.
    pub name: String,
    /// The effective scope multiplier that was applied (zero input is
    /// reported as 1).
    pub quantity: Decimal,
    /// Material cost for the scope.
    pub material: Decimal,
    /// Labor cost for the scope.
    pub labor: Decimal,
    /// Expense cost for the scope.
    pub expense: Decimal,
    /// Combined cost for the scope.
    pub total: Decimal,
}

/// Grand direct cost totals across all category scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectCostTotals {
    /// Total direct material cost.
    #[serde(default)]
    pub material: Decimal,
    /// Total direct labor cost.
    #[serde(default)]
    pub labor: Decimal,
    /// Total direct expense cost.
    #[serde(default)]
    pub expense: Decimal,
}

impl DirectCostTotals {
    /// Direct totals with all components zero.
    pub const ZERO: DirectCostTotals = DirectCostTotals {
        material: Decimal::ZERO,
        labor: Decimal::ZERO,
        expense: Decimal::ZERO,
    };

    /// Returns the combined direct cost across all three components.
    pub fn total(&self) -> Decimal {
        self.material + self.labor + self.expense
    }
}

/// The complete output of the direct cost aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectCostSummary {
    /// Grand totals across all category scopes.
    pub totals: DirectCostTotals,
    /// Per-category records in sequence order.
    pub per_category: Vec<CategoryTotal>,
}
