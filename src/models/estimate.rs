//! Bill-of-quantities models.
//!
//! An estimate is an ordered sequence of entries. Order is semantically
//! significant: a category entry opens an accumulation scope containing
//! every following item entry up to (not including) the next category
//! entry. Scopes are always re-derived from sequence order; no entry
//! stores a parent reference.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Distinguishes category headers from line items in the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// A category header opening an accumulation scope.
    Category,
    /// A line item, optionally linked to a unit analysis.
    Item,
}

/// One row of the bill of quantities.
///
/// For a category entry, `quantity` multiplies the already-summed costs of
/// the items in its scope (zero is treated as 1). For an item entry,
/// `quantity` multiplies the resolved per-unit cost of its linked analysis
/// (zero stays zero; no linked or resolvable analysis contributes zero
/// cost while keeping the display fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// Whether this row is a category header or a line item.
    pub kind: EntryKind,
    /// Category name or item name.
    pub name: String,
    /// Specification text.
    #[serde(default)]
    pub specification: String,
    /// Measurement unit for the quantity.
    #[serde(default)]
    pub unit: String,
    /// Quantity multiplier (scope multiplier for categories, per-unit
    /// multiplier for items).
    #[serde(default)]
    pub quantity: Decimal,
    /// Source text the quantity was computed from, if it came from the
    /// arithmetic formula evaluator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_formula: Option<String>,
    /// Link to a unit analysis (items only; optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EstimateEntry {
    /// Returns true if the entry is a category header.
    pub fn is_category(&self) -> bool {
        self.kind == EntryKind::Category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_entry_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Category).unwrap(),
            "\"CATEGORY\""
        );
        assert_eq!(serde_json::to_string(&EntryKind::Item).unwrap(), "\"ITEM\"");
    }

    #[test]
    fn test_deserialize_category_entry() {
        let json = r#"{
            "id": "est_001",
            "kind": "CATEGORY",
            "name": "Masonry",
            "quantity": 1
        }"#;

        let entry: EstimateEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_category());
        assert_eq!(entry.name, "Masonry");
        assert_eq!(entry.quantity, Decimal::ONE);
        assert!(entry.analysis_id.is_none());
    }

    #[test]
    fn test_deserialize_item_entry_with_formula() {
        let json = r#"{
            "id": "est_002",
            "kind": "ITEM",
            "name": "Cement brick laying",
            "specification": "1.0B",
            "unit": "m2",
            "quantity": "18.5",
            "quantity_formula": "(5.5 * 3) + 2",
            "analysis_id": "ua_001"
        }"#;

        let entry: EstimateEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_category());
        assert_eq!(entry.quantity, Decimal::from_str("18.5").unwrap());
        assert_eq!(entry.quantity_formula.as_deref(), Some("(5.5 * 3) + 2"));
        assert_eq!(entry.analysis_id.as_deref(), Some("ua_001"));
    }

    #[test]
    fn test_deserialize_entry_defaults_quantity_to_zero() {
        let json = r#"{
            "id": "est_003",
            "kind": "ITEM",
            "name": ""
        }"#;

        let entry: EstimateEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.quantity, Decimal::ZERO);
        assert!(entry.specification.is_empty());
        assert!(entry.unit.is_empty());
    }

    #[test]
    fn test_optional_fields_skipped_in_serialization() {
        let entry = EstimateEntry {
            id: "est_004".to_string(),
            kind: EntryKind::Category,
            name: "Earthworks".to_string(),
            specification: String::new(),
            unit: String::new(),
            quantity: Decimal::ONE,
            quantity_formula: None,
            analysis_id: None,
            note: None,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("quantity_formula"));
        assert!(!json.contains("analysis_id"));
        assert!(!json.contains("note"));
    }
}
