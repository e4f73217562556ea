//! Unit price analysis models.
//!
//! A unit analysis is a reusable cost recipe for one construction task,
//! expressed per one unit of output (m², m³, each). Its resource lines
//! carry a quantity and three unit prices; the resolved per-unit cost is
//! the quantity-weighted sum over all lines.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classifies a resource line for grouping and presentation.
///
/// The kind never affects cost arithmetic: every line carries all three
/// unit price fields and contributes each of them regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    /// Material resources (cement, bricks, rebar).
    Material,
    /// Labor resources (masons, helpers, operators).
    Labor,
    /// Expense resources (equipment hire, consumables).
    Expense,
}

/// One resource line inside a unit analysis.
///
/// Cost contribution per component = `quantity` × that component's unit
/// price. Absent numeric fields deserialize to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLine {
    /// Unique identifier for the line.
    pub id: String,
    /// Grouping/presentation classification.
    pub kind: ResourceKind,
    /// Resource name (e.g., "Cement brick").
    pub name: String,
    /// Specification text (e.g., "190×90×57").
    #[serde(default)]
    pub specification: String,
    /// Measurement unit for the quantity (e.g., "ea", "person").
    #[serde(default)]
    pub unit: String,
    /// Quantity consumed per one unit of the parent analysis output.
    #[serde(default)]
    pub quantity: Decimal,
    /// Material unit price.
    #[serde(default)]
    pub material_unit_price: Decimal,
    /// Labor unit price.
    #[serde(default)]
    pub labor_unit_price: Decimal,
    /// Expense unit price.
    #[serde(default)]
    pub expense_unit_price: Decimal,
    /// Source reference for the unit prices (price book, market survey).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
}

/// A reusable unit-cost recipe for one construction task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAnalysis {
    /// Unique identifier for the analysis.
    pub id: String,
    /// Work category the task belongs to (e.g., "Masonry").
    #[serde(default)]
    pub category: String,
    /// Task name (e.g., "Cement brick laying").
    pub name: String,
    /// Specification text (e.g., "1.0B").
    #[serde(default)]
    pub specification: String,
    /// Output unit the recipe is expressed per (e.g., "m2").
    #[serde(default)]
    pub unit: String,
    /// The resource lines making up the recipe.
    #[serde(default)]
    pub items: Vec<ResourceLine>,
    /// When the analysis was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Per-unit cost of an analysis, split by component.
///
/// # Example
///
/// ```
/// use estimate_engine::models::UnitCost;
/// use rust_decimal::Decimal;
///
/// let cost = UnitCost {
///     material: Decimal::from(100),
///     labor: Decimal::from(200),
///     expense: Decimal::from(50),
/// };
/// assert_eq!(cost.total(), Decimal::from(350));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCost {
    /// Material cost per unit of output.
    pub material: Decimal,
    /// Labor cost per unit of output.
    pub labor: Decimal,
    /// Expense cost per unit of output.
    pub expense: Decimal,
}

impl UnitCost {
    /// A unit cost with all components zero.
    pub const ZERO: UnitCost = UnitCost {
        material: Decimal::ZERO,
        labor: Decimal::ZERO,
        expense: Decimal::ZERO,
    };

    /// Returns the combined per-unit price across all three components.
    pub fn total(&self) -> Decimal {
        self.material + self.labor + self.expense
    }
}
