//! Direct cost aggregation over the ordered bill-of-quantities.
//!
//! A single left-to-right fold walks the entry sequence. Each category
//! entry opens an accumulation scope; item entries resolve their linked
//! analysis and add `per-unit cost × item quantity` into the open scope's
//! bucket. When the next category starts (and once more at the end of the
//! sequence) the bucket is flushed: the category quantity multiplies the
//! already-summed bucket, the record joins the completed list, and the
//! grand totals grow.
//!
//! Items before the first category belong to no scope and are excluded
//! from the grand totals. An item whose analysis reference does not
//! resolve contributes zero cost; the computation continues.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{
    CategoryTotal, DirectCostSummary, DirectCostTotals, EntryKind, EstimateEntry, UnitAnalysis,
};

use super::unit_cost::compute_unit_cost;

/// Resolves analysis identifiers to unit analyses.
///
/// The analysis store is owned by the surrounding application; the
/// aggregator only ever reads through this trait.
pub trait AnalysisLookup {
    /// Returns the analysis for an identifier, if it exists.
    fn analysis(&self, id: &str) -> Option<&UnitAnalysis>;
}

impl AnalysisLookup for HashMap<String, UnitAnalysis> {
    fn analysis(&self, id: &str) -> Option<&UnitAnalysis> {
        self.get(id)
    }
}

impl<L: AnalysisLookup + ?Sized> AnalysisLookup for &L {
    fn analysis(&self, id: &str) -> Option<&UnitAnalysis> {
        (**self).analysis(id)
    }
}

/// Running material/labor/expense accumulator for one category scope.
#[derive(Debug, Clone, Copy)]
struct Bucket {
    material: Decimal,
    labor: Decimal,
    expense: Decimal,
}

impl Bucket {
    const ZERO: Bucket = Bucket {
        material: Decimal::ZERO,
        labor: Decimal::ZERO,
        expense: Decimal::ZERO,
    };
}

/// Aggregates the ordered entry sequence into per-category records and
/// grand direct totals.
///
/// Per-category component totals are `scope subtotal × category quantity`
/// (a zero category quantity is treated as 1); the grand totals are the
/// sum over all flushed scopes. No flooring happens here — the
/// per-category totals sum exactly to the grand totals.
///
/// A flushed category appears in `per_category` when it is named or its
/// total is nonzero; its contribution to the grand totals is added either
/// way.
///
/// # Example
///
/// ```
/// use estimate_engine::calculation::compute_direct_totals;
/// use estimate_engine::models::{EntryKind, EstimateEntry};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let entries = vec![EstimateEntry {
///     id: "est_001".to_string(),
///     kind: EntryKind::Category,
///     name: "Masonry".to_string(),
///     specification: String::new(),
///     unit: String::new(),
///     quantity: Decimal::ONE,
///     quantity_formula: None,
///     analysis_id: None,
///     note: None,
/// }];
/// let analyses: HashMap<String, _> = HashMap::new();
///
/// let summary = compute_direct_totals(&entries, &analyses);
/// assert_eq!(summary.totals.total(), Decimal::ZERO);
/// assert_eq!(summary.per_category.len(), 1);
/// ```
pub fn compute_direct_totals<L: AnalysisLookup>(
    entries: &[EstimateEntry],
    lookup: &L,
) -> DirectCostSummary {
    let mut open: Option<&EstimateEntry> = None;
    let mut bucket = Bucket::ZERO;
    let mut completed: Vec<CategoryTotal> = Vec::new();
    let mut grand = DirectCostTotals::ZERO;

    for entry in entries {
        match entry.kind {
            EntryKind::Category => {
                flush_scope(open.take(), &bucket, &mut completed, &mut grand);
                open = Some(entry);
                bucket = Bucket::ZERO;
            }
            EntryKind::Item => {
                // Items before the first category belong to no scope.
                if open.is_none() {
                    continue;
                }
                let unit = entry
                    .analysis_id
                    .as_deref()
                    .and_then(|id| lookup.analysis(id))
                    .map(compute_unit_cost);
                if let Some(unit) = unit {
                    bucket.material += unit.material * entry.quantity;
                    bucket.labor += unit.labor * entry.quantity;
                    bucket.expense += unit.expense * entry.quantity;
                }
            }
        }
    }
    flush_scope(open, &bucket, &mut completed, &mut grand);

    DirectCostSummary {
        totals: grand,
        per_category: completed,
    }
}

/// Closes a category scope: applies the scope multiplier, records the
/// category, and adds its contribution to the grand totals.
fn flush_scope(
    category: Option<&EstimateEntry>,
    bucket: &Bucket,
    completed: &mut Vec<CategoryTotal>,
    grand: &mut DirectCostTotals,
) {
    let Some(category) = category else {
        return;
    };

    let quantity = if category.quantity.is_zero() {
        Decimal::ONE
    } else {
        category.quantity
    };

    let material = bucket.material * quantity;
    let labor = bucket.labor * quantity;
    let expense = bucket.expense * quantity;
    let total = material + labor + expense;

    grand.material += material;
    grand.labor += labor;
    grand.expense += expense;

    if !category.name.is_empty() || total > Decimal::ZERO {
        completed.push(CategoryTotal {
            id: category.id.clone(),
            name: category.name.clone(),
            quantity,
            material,
            labor,
            expense,
            total,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResourceKind, ResourceLine};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn category(id: &str, name: &str, quantity: &str) -> EstimateEntry {
        EstimateEntry {
            id: id.to_string(),
            kind: EntryKind::Category,
            name: name.to_string(),
            specification: String::new(),
            unit: String::new(),
            quantity: dec(quantity),
            quantity_formula: None,
            analysis_id: None,
            note: None,
        }
    }

    fn item(id: &str, name: &str, quantity: &str, analysis_id: Option<&str>) -> EstimateEntry {
        EstimateEntry {
            id: id.to_string(),
            kind: EntryKind::Item,
            name: name.to_string(),
            specification: String::new(),
            unit: "m2".to_string(),
            quantity: dec(quantity),
            quantity_formula: None,
            analysis_id: analysis_id.map(str::to_string),
            note: None,
        }
    }

    /// An analysis whose per-unit cost is (material, labor, expense).
    fn analysis(id: &str, material: &str, labor: &str, expense: &str) -> UnitAnalysis {
        UnitAnalysis {
            id: id.to_string(),
            category: "Masonry".to_string(),
            name: "test task".to_string(),
            specification: String::new(),
            unit: "m2".to_string(),
            items: vec![ResourceLine {
                id: format!("{id}_line"),
                kind: ResourceKind::Material,
                name: "bundle".to_string(),
                specification: String::new(),
                unit: "ea".to_string(),
                quantity: Decimal::ONE,
                material_unit_price: dec(material),
                labor_unit_price: dec(labor),
                expense_unit_price: dec(expense),
                price_source: None,
            }],
            created_at: None,
            note: None,
        }
    }

    fn index(analyses: Vec<UnitAnalysis>) -> HashMap<String, UnitAnalysis> {
        analyses.into_iter().map(|a| (a.id.clone(), a)).collect()
    }

    /// DC-001: empty sequence produces all-zero totals
    #[test]
    fn test_empty_sequence_is_all_zero() {
        let summary = compute_direct_totals(&[], &HashMap::new());
        assert_eq!(summary.totals, DirectCostTotals::ZERO);
        assert!(summary.per_category.is_empty());
    }

    /// DC-002: one category, one item, quantity multipliers applied
    #[test]
    fn test_single_category_single_item() {
        let entries = vec![
            category("est_cat", "Masonry", "1"),
            item("est_item", "Cement brick laying", "10", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "200", "50")]);

        let summary = compute_direct_totals(&entries, &analyses);

        assert_eq!(summary.per_category.len(), 1);
        let cat = &summary.per_category[0];
        assert_eq!(cat.material, dec("1000"));
        assert_eq!(cat.labor, dec("2000"));
        assert_eq!(cat.expense, dec("500"));
        assert_eq!(cat.total, dec("3500"));

        assert_eq!(summary.totals.material, dec("1000"));
        assert_eq!(summary.totals.labor, dec("2000"));
        assert_eq!(summary.totals.expense, dec("500"));
    }

    /// DC-003: category quantity multiplies the summed bucket, not each child
    #[test]
    fn test_category_quantity_multiplies_summed_bucket() {
        let entries = vec![
            category("est_cat", "Masonry", "3"),
            item("est_a", "task a", "2", Some("ua_001")),
            item("est_b", "task b", "1", Some("ua_002")),
        ];
        let analyses = index(vec![
            analysis("ua_001", "100", "0", "0"),
            analysis("ua_002", "50", "0", "0"),
        ]);

        let summary = compute_direct_totals(&entries, &analyses);

        // (2×100 + 1×50) × 3 = 750
        assert_eq!(summary.totals.material, dec("750"));
    }

    /// DC-004: doubling the category quantity doubles its totals
    #[test]
    fn test_doubling_category_quantity_doubles_totals() {
        let analyses = index(vec![analysis("ua_001", "100", "200", "50")]);
        let base = vec![
            category("est_cat", "Masonry", "2"),
            item("est_item", "task", "10", Some("ua_001")),
        ];
        let doubled = vec![
            category("est_cat", "Masonry", "4"),
            item("est_item", "task", "10", Some("ua_001")),
        ];

        let base = compute_direct_totals(&base, &analyses);
        let doubled = compute_direct_totals(&doubled, &analyses);

        assert_eq!(
            doubled.per_category[0].total,
            base.per_category[0].total * Decimal::TWO
        );
        assert_eq!(doubled.totals.total(), base.totals.total() * Decimal::TWO);
    }

    /// DC-005: items before the first category are excluded
    #[test]
    fn test_items_before_first_category_excluded() {
        let entries = vec![
            item("est_orphan", "orphan task", "100", Some("ua_001")),
            category("est_cat", "Masonry", "1"),
            item("est_item", "task", "1", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "200", "50")]);

        let summary = compute_direct_totals(&entries, &analyses);

        // Only the in-scope item counts.
        assert_eq!(summary.totals.material, dec("100"));
        assert_eq!(summary.totals.labor, dec("200"));
        assert_eq!(summary.totals.expense, dec("50"));
    }

    /// DC-006: unresolvable analysis reference contributes zero
    #[test]
    fn test_unresolved_reference_contributes_zero() {
        let entries = vec![
            category("est_cat", "Masonry", "1"),
            item("est_missing", "dangling task", "10", Some("ua_gone")),
            item("est_unlinked", "unlinked task", "10", None),
            item("est_item", "task", "1", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "0", "0")]);

        let summary = compute_direct_totals(&entries, &analyses);

        assert_eq!(summary.totals.material, dec("100"));
        assert_eq!(summary.per_category[0].total, dec("100"));
    }

    /// DC-007: zero category quantity is treated as 1
    #[test]
    fn test_zero_category_quantity_treated_as_one() {
        let entries = vec![
            category("est_cat", "Masonry", "0"),
            item("est_item", "task", "1", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "0", "0")]);

        let summary = compute_direct_totals(&entries, &analyses);

        assert_eq!(summary.totals.material, dec("100"));
        assert_eq!(summary.per_category[0].quantity, Decimal::ONE);
    }

    /// DC-008: zero item quantity stays zero
    #[test]
    fn test_zero_item_quantity_stays_zero() {
        let entries = vec![
            category("est_cat", "Masonry", "1"),
            item("est_item", "task", "0", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "200", "50")]);

        let summary = compute_direct_totals(&entries, &analyses);

        assert_eq!(summary.totals.total(), Decimal::ZERO);
    }

    /// DC-009: per-category totals sum exactly to the grand totals
    #[test]
    fn test_per_category_sums_to_grand_totals() {
        let entries = vec![
            category("est_cat1", "Masonry", "1"),
            item("est_a", "task a", "3.5", Some("ua_001")),
            category("est_cat2", "Plastering", "2.5"),
            item("est_b", "task b", "7.25", Some("ua_002")),
            category("est_cat3", "Painting", "1"),
            item("est_c", "task c", "0.4", Some("ua_001")),
        ];
        let analyses = index(vec![
            analysis("ua_001", "123.45", "67.89", "10.11"),
            analysis("ua_002", "55.5", "44.4", "33.3"),
        ]);

        let summary = compute_direct_totals(&entries, &analyses);

        let material: Decimal = summary.per_category.iter().map(|c| c.material).sum();
        let labor: Decimal = summary.per_category.iter().map(|c| c.labor).sum();
        let expense: Decimal = summary.per_category.iter().map(|c| c.expense).sum();

        assert_eq!(material, summary.totals.material);
        assert_eq!(labor, summary.totals.labor);
        assert_eq!(expense, summary.totals.expense);
    }

    /// DC-010: unnamed zero-total categories are not listed
    #[test]
    fn test_unnamed_zero_category_not_listed() {
        let entries = vec![
            category("est_blank", "", "1"),
            category("est_named", "Masonry", "1"),
        ];

        let summary = compute_direct_totals(&entries, &HashMap::new());

        assert_eq!(summary.per_category.len(), 1);
        assert_eq!(summary.per_category[0].name, "Masonry");
    }

    /// DC-011: the last open scope is flushed at end of sequence
    #[test]
    fn test_last_scope_flushed_at_end() {
        let entries = vec![
            category("est_cat1", "Masonry", "1"),
            item("est_a", "task a", "1", Some("ua_001")),
            category("est_cat2", "Plastering", "1"),
            item("est_b", "task b", "1", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "0", "0")]);

        let summary = compute_direct_totals(&entries, &analyses);

        assert_eq!(summary.per_category.len(), 2);
        assert_eq!(summary.per_category[1].name, "Plastering");
        assert_eq!(summary.per_category[1].total, dec("100"));
        assert_eq!(summary.totals.material, dec("200"));
    }

    /// DC-012: inputs are never mutated and recomputation is deterministic
    #[test]
    fn test_recomputation_is_deterministic() {
        let entries = vec![
            category("est_cat", "Masonry", "2"),
            item("est_item", "task", "10", Some("ua_001")),
        ];
        let analyses = index(vec![analysis("ua_001", "100", "200", "50")]);

        let first = compute_direct_totals(&entries, &analyses);
        let second = compute_direct_totals(&entries, &analyses);

        assert_eq!(first, second);
    }
}
