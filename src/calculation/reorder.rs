//! Block-preserving reordering of the estimate sequence.
//!
//! Category scopes are positional, so a category must travel together
//! with every following item up to the next category — moving the header
//! alone would hand its children to a different scope. Item entries move
//! individually. Scope membership is always re-derived from the resulting
//! sequence order by the aggregation fold.

use crate::error::{EngineError, EngineResult};
use crate::models::{EntryKind, EstimateEntry};

/// Returns the number of entries in the block starting at `index`: the
/// entry itself plus, for a category, every following non-category entry.
///
/// Returns 0 when `index` is out of range.
pub fn category_span(entries: &[EstimateEntry], index: usize) -> usize {
    let Some(entry) = entries.get(index) else {
        return 0;
    };
    if entry.kind != EntryKind::Category {
        return 1;
    }
    1 + entries[index + 1..]
        .iter()
        .take_while(|e| e.kind != EntryKind::Category)
        .count()
}

/// Moves the entry at `from` to position `to`, preserving category
/// blocks.
///
/// A category entry moves as one atomic block with its contiguous child
/// items; any other entry moves alone. `to` addresses a position in the
/// sequence with the moved block removed (positions past the end clamp to
/// the end). An out-of-range `from` is rejected with
/// [`EngineError::InvalidReorder`]; `from == to` returns the sequence
/// unchanged.
///
/// # Example
///
/// ```
/// use estimate_engine::calculation::reorder_entries;
/// use estimate_engine::models::{EntryKind, EstimateEntry};
/// use rust_decimal::Decimal;
///
/// let entry = |id: &str, kind| EstimateEntry {
///     id: id.to_string(),
///     kind,
///     name: id.to_string(),
///     specification: String::new(),
///     unit: String::new(),
///     quantity: Decimal::ONE,
///     quantity_formula: None,
///     analysis_id: None,
///     note: None,
/// };
/// let entries = vec![
///     entry("cat_a", EntryKind::Category),
///     entry("item_a1", EntryKind::Item),
///     entry("cat_b", EntryKind::Category),
/// ];
///
/// // Moving cat_a carries item_a1 with it.
/// let moved = reorder_entries(&entries, 0, 1).unwrap();
/// let ids: Vec<&str> = moved.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(ids, vec!["cat_b", "cat_a", "item_a1"]);
/// ```
pub fn reorder_entries(
    entries: &[EstimateEntry],
    from: usize,
    to: usize,
) -> EngineResult<Vec<EstimateEntry>> {
    if from >= entries.len() {
        return Err(EngineError::InvalidReorder {
            from,
            len: entries.len(),
        });
    }
    if from == to {
        return Ok(entries.to_vec());
    }

    let span = category_span(entries, from);
    let mut items = entries.to_vec();
    let block: Vec<EstimateEntry> = items.drain(from..from + span).collect();
    let insert_at = to.min(items.len());
    items.splice(insert_at..insert_at, block);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn entry(id: &str, kind: EntryKind) -> EstimateEntry {
        EstimateEntry {
            id: id.to_string(),
            kind,
            name: id.to_string(),
            specification: String::new(),
            unit: String::new(),
            quantity: Decimal::ONE,
            quantity_formula: None,
            analysis_id: None,
            note: None,
        }
    }

    fn ids(entries: &[EstimateEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn sample() -> Vec<EstimateEntry> {
        vec![
            entry("cat_a", EntryKind::Category),
            entry("item_a1", EntryKind::Item),
            entry("item_a2", EntryKind::Item),
            entry("cat_b", EntryKind::Category),
            entry("item_b1", EntryKind::Item),
        ]
    }

    /// RO-001: category span covers the contiguous child block
    #[test]
    fn test_category_span() {
        let entries = sample();
        assert_eq!(category_span(&entries, 0), 3);
        assert_eq!(category_span(&entries, 3), 2);
        assert_eq!(category_span(&entries, 1), 1);
        assert_eq!(category_span(&entries, 99), 0);
    }

    /// RO-002: moving a category carries its child block
    #[test]
    fn test_category_moves_with_children() {
        let moved = reorder_entries(&sample(), 0, 2).unwrap();
        assert_eq!(
            ids(&moved),
            vec!["cat_b", "item_b1", "cat_a", "item_a1", "item_a2"]
        );
    }

    /// RO-003: moving a category to the front
    #[test]
    fn test_category_moves_to_front() {
        let moved = reorder_entries(&sample(), 3, 0).unwrap();
        assert_eq!(
            ids(&moved),
            vec!["cat_b", "item_b1", "cat_a", "item_a1", "item_a2"]
        );
    }

    /// RO-004: moving an item relocates only that entry
    #[test]
    fn test_item_moves_alone() {
        let moved = reorder_entries(&sample(), 1, 2).unwrap();
        assert_eq!(
            ids(&moved),
            vec!["cat_a", "item_a2", "item_a1", "cat_b", "item_b1"]
        );
    }

    /// RO-005: moving an item within its scope keeps every membership
    #[test]
    fn test_item_move_within_scope_keeps_memberships() {
        let entries = sample();
        let moved = reorder_entries(&entries, 2, 1).unwrap();

        // Both item_a1 and item_a2 still sit between cat_a and cat_b.
        let cat_a = moved.iter().position(|e| e.id == "cat_a").unwrap();
        let cat_b = moved.iter().position(|e| e.id == "cat_b").unwrap();
        for id in ["item_a1", "item_a2"] {
            let pos = moved.iter().position(|e| e.id == id).unwrap();
            assert!(cat_a < pos && pos < cat_b);
        }
    }

    /// RO-006: from == to is a no-op
    #[test]
    fn test_same_index_is_noop() {
        let entries = sample();
        let moved = reorder_entries(&entries, 2, 2).unwrap();
        assert_eq!(moved, entries);
    }

    /// RO-007: out-of-range source index is rejected
    #[test]
    fn test_out_of_range_from_rejected() {
        let entries = sample();
        match reorder_entries(&entries, 7, 0) {
            Err(EngineError::InvalidReorder { from, len }) => {
                assert_eq!(from, 7);
                assert_eq!(len, 5);
            }
            other => panic!("Expected InvalidReorder, got {other:?}"),
        }
    }

    /// RO-008: destination past the end clamps to the end
    #[test]
    fn test_destination_clamps_to_end() {
        let moved = reorder_entries(&sample(), 1, 99).unwrap();
        assert_eq!(
            ids(&moved),
            vec!["cat_a", "item_a2", "cat_b", "item_b1", "item_a1"]
        );
    }

    /// RO-009: a category block at the end of the sequence moves intact
    #[test]
    fn test_trailing_category_block_moves_intact() {
        let moved = reorder_entries(&sample(), 3, 0).unwrap();
        assert_eq!(category_span(&moved, 0), 2);
        assert_eq!(ids(&moved)[0..2], ["cat_b", "item_b1"]);
    }

    /// RO-010: the input sequence is never mutated
    #[test]
    fn test_input_not_mutated() {
        let entries = sample();
        let _ = reorder_entries(&entries, 0, 2).unwrap();
        assert_eq!(ids(&entries), vec![
            "cat_a", "item_a1", "item_a2", "cat_b", "item_b1"
        ]);
    }

    /// RO-011: leading items stay outside every scope after a move
    #[test]
    fn test_leading_items_stay_leading_when_untouched() {
        let entries = vec![
            entry("item_orphan", EntryKind::Item),
            entry("cat_a", EntryKind::Category),
            entry("item_a1", EntryKind::Item),
            entry("cat_b", EntryKind::Category),
        ];

        let moved = reorder_entries(&entries, 3, 2).unwrap();
        assert_eq!(ids(&moved), vec!["item_orphan", "cat_a", "cat_b", "item_a1"]);
    }
}
