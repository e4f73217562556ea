//! Summary projection over per-category totals.
//!
//! Derives display/export views from the aggregation output: each
//! category's percentage share of the grand total, and a ranking by total
//! for top-N charts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CategoryTotal, DirectCostSummary};

/// One category's share of the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// The category entry's identifier.
    pub id: String,
    /// The category name.
    pub name: String,
    /// Combined cost for the category scope.
    pub total: Decimal,
    /// Percentage share of the grand total (0 when the grand total is 0).
    pub share: Decimal,
}

/// Computes each category's percentage share of the grand total.
///
/// Shares are zero when the grand total is zero; there is never a
/// division by zero. The output preserves sequence order.
///
/// # Example
///
/// ```
/// use estimate_engine::calculation::summarize_categories;
/// use estimate_engine::models::{DirectCostSummary, DirectCostTotals};
///
/// let summary = DirectCostSummary {
///     totals: DirectCostTotals::ZERO,
///     per_category: vec![],
/// };
/// assert!(summarize_categories(&summary).is_empty());
/// ```
pub fn summarize_categories(summary: &DirectCostSummary) -> Vec<CategoryShare> {
    let grand = summary.totals.total();

    summary
        .per_category
        .iter()
        .map(|category| CategoryShare {
            id: category.id.clone(),
            name: category.name.clone(),
            total: category.total,
            share: if grand.is_zero() {
                Decimal::ZERO
            } else {
                category.total / grand * Decimal::ONE_HUNDRED
            },
        })
        .collect()
}

/// Ranks categories by total descending and keeps the first `n`.
///
/// Ties keep sequence order (the sort is stable).
pub fn top_categories(summary: &DirectCostSummary, n: usize) -> Vec<CategoryTotal> {
    let mut ranked = summary.per_category.clone();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked.truncate(n);
    ranked
}
