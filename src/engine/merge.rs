//! Result collection: merging per-chunk partial outputs.
//!
//! Partial outputs arrive already keyed by chunk ordinal (the dispatcher
//! stores each chunk's output in its own slot), so merging never depends on
//! task completion order. Ordered targets concatenate in ascending ordinal
//! order; unordered targets union under the target's equality rule.

use std::collections::HashSet;
use std::hash::Hash;

use crate::engine::task::Parts;

/// Concatenates partial outputs in ascending chunk-ordinal order.
///
/// This reproduces exactly the element order a serial pass would produce,
/// regardless of which chunk's task finished first.
pub(crate) fn concat<O>(parts: Parts<O>) -> Vec<O> {
    let total: usize = parts.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);
    for part in parts {
        merged.extend(part);
    }
    merged
}

/// Unions partial outputs into a set, collapsing duplicates.
///
/// The merged cardinality may be less than the number of elements produced,
/// never greater.
pub(crate) fn union<O: Eq + Hash>(parts: Parts<O>) -> HashSet<O> {
    let total: usize = parts.iter().map(Vec::len).sum();
    let mut merged = HashSet::with_capacity(total);
    for part in parts {
        merged.extend(part);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_preserves_ordinal_order() {
        let parts = vec![vec![1, 2], vec![3, 4], vec![5]];
        assert_eq!(concat(parts), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_concat_skips_nothing_on_uneven_parts() {
        let parts = vec![vec![], vec![7], vec![], vec![8, 9]];
        assert_eq!(concat(parts), vec![7, 8, 9]);
    }

    #[test]
    fn test_concat_of_no_parts_is_empty() {
        assert_eq!(concat::<i32>(Vec::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_union_collapses_duplicates_across_chunks() {
        let parts = vec![vec![1, 2], vec![2, 3], vec![3, 1]];
        let merged = union(parts);
        assert_eq!(merged, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_union_of_no_parts_is_empty() {
        assert!(union::<i32>(Vec::new()).is_empty());
    }
}
