//! Calculation logic for the Construction Cost Estimating Engine.
//!
//! This module contains all the calculation functions: resolving a unit
//! analysis into per-unit costs, folding the ordered bill-of-quantities
//! into per-category and grand direct totals, deriving the statutory cost
//! breakdown chain, projecting category shares and rankings, evaluating
//! sandboxed quantity formulas, and block-preserving entry reordering.
//!
//! Every function here is pure and synchronous: it recomputes from the
//! input snapshot on each call, never mutates its inputs, and holds no
//! state between calls.

mod breakdown;
mod direct_costs;
mod formula;
mod reorder;
mod rounding;
mod summary;
mod unit_cost;

pub use breakdown::compute_breakdown;
pub use direct_costs::{AnalysisLookup, compute_direct_totals};
pub use formula::{QUANTITY_DECIMAL_PLACES, evaluate_formula, evaluate_quantity};
pub use reorder::{category_span, reorder_entries};
pub use rounding::{floor_currency, floored_percent};
pub use summary::{CategoryShare, summarize_categories, top_categories};
pub use unit_cost::compute_unit_cost;
