//! Request types for the Construction Cost Estimating Engine API.
//!
//! This module defines the JSON request structures for the compute,
//! reorder, and quantity endpoints. Analyses travel as a list and are
//! indexed by id before the aggregation runs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::RateSchedule;
use crate::models::{DirectCostTotals, EstimateEntry, UnitAnalysis};

/// Request body for `POST /compute/unit-cost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCostRequest {
    /// The unit analysis to resolve.
    pub analysis: UnitAnalysis,
}

/// Request body for `POST /compute/direct-totals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectTotalsRequest {
    /// The ordered bill-of-quantities.
    pub entries: Vec<EstimateEntry>,
    /// The analyses referenced by the entries.
    #[serde(default)]
    pub analyses: Vec<UnitAnalysis>,
}

/// Request body for `POST /compute/breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The direct totals the chain derives from.
    pub direct: DirectCostTotals,
    /// Rate overrides; the server's default schedule applies when absent.
    #[serde(default)]
    pub rates: Option<RateSchedule>,
}

/// Request body for `POST /compute/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The ordered bill-of-quantities.
    pub entries: Vec<EstimateEntry>,
    /// The analyses referenced by the entries.
    #[serde(default)]
    pub analyses: Vec<UnitAnalysis>,
    /// When set, also return the top-N ranking by category total.
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Request body for `POST /compute/statement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The ordered bill-of-quantities.
    pub entries: Vec<EstimateEntry>,
    /// The analyses referenced by the entries.
    #[serde(default)]
    pub analyses: Vec<UnitAnalysis>,
    /// Rate overrides; the server's default schedule applies when absent.
    #[serde(default)]
    pub rates: Option<RateSchedule>,
}

/// Request body for `POST /estimate/reorder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    /// The ordered bill-of-quantities.
    pub entries: Vec<EstimateEntry>,
    /// Source index of the entry (or category block) to move.
    pub from_index: usize,
    /// Destination position in the sequence with the block removed.
    pub to_index: usize,
}

/// Request body for `POST /quantity/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityRequest {
    /// The arithmetic take-off formula to evaluate.
    pub formula: String,
}

/// Indexes a list of analyses by id for the aggregation lookup.
///
/// Later duplicates win, matching a store that upserts by id.
pub(super) fn index_analyses(analyses: Vec<UnitAnalysis>) -> HashMap<String, UnitAnalysis> {
    analyses.into_iter().map(|a| (a.id.clone(), a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_deserialize_direct_totals_request() {
        let json = r#"{
            "entries": [
                {"id": "est_001", "kind": "CATEGORY", "name": "Masonry", "quantity": 1},
                {"id": "est_002", "kind": "ITEM", "name": "Brick laying",
                 "quantity": 10, "analysis_id": "ua_001"}
            ],
            "analyses": [
                {"id": "ua_001", "name": "Brick laying", "unit": "m2", "items": []}
            ]
        }"#;

        let request: DirectTotalsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.analyses.len(), 1);
        assert_eq!(request.entries[1].analysis_id.as_deref(), Some("ua_001"));
    }

    #[test]
    fn test_deserialize_breakdown_request_without_rates() {
        let json = r#"{
            "direct": {"material": 1000000, "labor": 500000, "expense": 100000}
        }"#;

        let request: BreakdownRequest = serde_json::from_str(json).unwrap();
        assert!(request.rates.is_none());
        assert_eq!(request.direct.labor, Decimal::from(500_000));
    }

    #[test]
    fn test_deserialize_breakdown_request_with_rates() {
        let json = r#"{
            "direct": {"material": 0, "labor": 0, "expense": 0},
            "rates": {"vat": 10.0}
        }"#;

        let request: BreakdownRequest = serde_json::from_str(json).unwrap();
        let rates = request.rates.unwrap();
        assert_eq!(
            rates.percent(crate::config::RateKey::Vat),
            Decimal::from(10)
        );
    }

    #[test]
    fn test_deserialize_reorder_request() {
        let json = r#"{
            "entries": [{"id": "est_001", "kind": "CATEGORY", "name": "Masonry"}],
            "from_index": 0,
            "to_index": 0
        }"#;

        let request: ReorderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.from_index, 0);
        assert_eq!(request.to_index, 0);
    }

    #[test]
    fn test_index_analyses_later_duplicate_wins() {
        let first = UnitAnalysis {
            id: "ua_001".to_string(),
            category: String::new(),
            name: "first".to_string(),
            specification: String::new(),
            unit: "m2".to_string(),
            items: vec![],
            created_at: None,
            note: None,
        };
        let mut second = first.clone();
        second.name = "second".to_string();

        let index = index_analyses(vec![first, second]);
        assert_eq!(index.len(), 1);
        assert_eq!(index["ua_001"].name, "second");
    }
}
