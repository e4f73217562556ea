//! Unit analysis cost resolution.
//!
//! Reduces one reusable cost recipe into its per-unit material/labor/
//! expense totals: the quantity-weighted sum over all resource lines.
//! Every line contributes all three components regardless of its kind.

use crate::models::{UnitAnalysis, UnitCost};

/// Resolves a unit analysis into its per-unit cost.
///
/// Each resource line contributes `quantity × unit price` to each of the
/// three components. An empty item list resolves to all zeros. There are
/// no error conditions; absent numeric fields arrive as zero from the
/// serde boundary and contribute nothing.
///
/// # Example
///
/// ```
/// use estimate_engine::calculation::compute_unit_cost;
/// use estimate_engine::models::{ResourceKind, ResourceLine, UnitAnalysis};
/// use rust_decimal::Decimal;
///
/// let analysis = UnitAnalysis {
///     id: "ua_001".to_string(),
///     category: "Masonry".to_string(),
///     name: "Cement brick laying".to_string(),
///     specification: "1.0B".to_string(),
///     unit: "m2".to_string(),
///     items: vec![ResourceLine {
///         id: "line_001".to_string(),
///         kind: ResourceKind::Material,
///         name: "Cement brick".to_string(),
///         specification: String::new(),
///         unit: "ea".to_string(),
///         quantity: Decimal::from(75),
///         material_unit_price: Decimal::from(120),
///         labor_unit_price: Decimal::ZERO,
///         expense_unit_price: Decimal::ZERO,
///         price_source: None,
///     }],
///     created_at: None,
///     note: None,
/// };
///
/// let cost = compute_unit_cost(&analysis);
/// assert_eq!(cost.material, Decimal::from(9000));
/// ```
pub fn compute_unit_cost(analysis: &UnitAnalysis) -> UnitCost {
    analysis
        .items
        .iter()
        .fold(UnitCost::ZERO, |acc, line| UnitCost {
            material: acc.material + line.material_unit_price * line.quantity,
            labor: acc.labor + line.labor_unit_price * line.quantity,
            expense: acc.expense + line.expense_unit_price * line.quantity,
        })
}
