//! Property-based tests for the traversal laws.
//!
//! These verify, over arbitrary inputs and strides, that chunked execution
//! is observationally identical to a serial pass and that the operations
//! satisfy their algebraic contracts.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use proptest::prelude::*;
use sifter::{Dispatch, TraverseError};
use sifter::prelude::*;

mod support;
use support::{IN_ORDER, INTERLEAVED, REVERSE_ORDER};

proptest! {
    /// Chunk-and-merge map equals serial map for every stride.
    #[test]
    fn prop_chunked_map_equals_serial_map(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        stride_value in 1usize..50
    ) {
        let stride = NonZeroUsize::new(stride_value).unwrap();
        let serial = elements.mapped(|n| Some(i64::from(*n) * 2)).unwrap();
        let chunked = elements
            .mapped_with(Dispatch::on(&IN_ORDER).stride(stride), |n| Some(i64::from(*n) * 2))
            .unwrap();
        prop_assert_eq!(serial, chunked);
    }

    /// Merged order is invariant under completion-order permutations.
    #[test]
    fn prop_merged_order_ignores_completion_order(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        stride_value in 1usize..50
    ) {
        let stride = NonZeroUsize::new(stride_value).unwrap();
        let in_order = elements
            .mapped_with(Dispatch::on(&IN_ORDER).stride(stride), |n| Some(n.wrapping_mul(3)))
            .unwrap();
        let reversed = elements
            .mapped_with(Dispatch::on(&REVERSE_ORDER).stride(stride), |n| Some(n.wrapping_mul(3)))
            .unwrap();
        let interleaved = elements
            .mapped_with(Dispatch::on(&INTERLEAVED).stride(stride), |n| Some(n.wrapping_mul(3)))
            .unwrap();
        prop_assert_eq!(&in_order, &reversed);
        prop_assert_eq!(&in_order, &interleaved);
    }

    /// Select and reject with the same predicate partition the source
    /// exactly: disjoint outputs whose interleaving reconstructs it.
    #[test]
    fn prop_select_and_reject_partition(
        elements in prop::collection::vec(any::<i16>(), 0..200),
        stride_value in 1usize..50
    ) {
        let stride = NonZeroUsize::new(stride_value).unwrap();
        let predicate = |n: &i16| n % 3 == 0;
        let dispatch = Dispatch::on(&REVERSE_ORDER).stride(stride);

        let selected = elements.selected_with(dispatch, predicate).unwrap();
        let rejected = elements.rejected_with(dispatch, predicate).unwrap();

        prop_assert_eq!(selected.len() + rejected.len(), elements.len());

        let mut selected_iter = selected.iter();
        let mut rejected_iter = rejected.iter();
        for element in &elements {
            let reconstructed = if predicate(element) {
                selected_iter.next()
            } else {
                rejected_iter.next()
            };
            prop_assert_eq!(reconstructed, Some(element));
        }
        prop_assert_eq!(selected_iter.next(), None);
        prop_assert_eq!(rejected_iter.next(), None);
    }

    /// Reduce with an explicit seed is exactly a manual left fold.
    #[test]
    fn prop_reduce_equals_manual_left_fold(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        initial in any::<i64>()
    ) {
        let reduced = elements
            .reduced(initial, |accumulator, n| accumulator.wrapping_add(i64::from(*n)))
            .unwrap();
        let manual = elements
            .iter()
            .fold(initial, |accumulator, n| accumulator.wrapping_add(i64::from(*n)));
        prop_assert_eq!(reduced, manual);
    }

    /// Seedless reduce equals reduce of the tail seeded with the head.
    #[test]
    fn prop_seedless_reduce_equals_head_seeded_reduce(
        elements in prop::collection::vec(any::<i32>(), 1..200)
    ) {
        let seedless = elements
            .reduced_first(|accumulator, n| accumulator.wrapping_mul(*n))
            .unwrap();
        let seeded = elements[1..]
            .reduced(elements[0], |accumulator, n| accumulator.wrapping_mul(*n))
            .unwrap();
        prop_assert_eq!(seedless, seeded);
    }

    /// Mapping a set never grows it, and produces exactly the set of
    /// serially transformed values.
    #[test]
    fn prop_set_map_cardinality_never_grows(
        elements in prop::collection::hash_set(any::<i32>(), 0..200)
    ) {
        let mapped = elements.mapped(|n| Some(n / 7)).unwrap();
        let expected: HashSet<i32> = elements.iter().map(|n| n / 7).collect();
        prop_assert!(mapped.len() <= elements.len());
        prop_assert_eq!(mapped, expected);
    }

    /// The in-place forms agree with their build-new counterparts.
    #[test]
    fn prop_in_place_forms_agree_with_immutable_forms(
        elements in prop::collection::vec(any::<i16>(), 0..200)
    ) {
        let predicate = |n: &i16| *n < 0;

        let mut selected_in_place = elements.clone();
        selected_in_place.select_in_place(predicate).unwrap();
        prop_assert_eq!(selected_in_place, elements.selected(predicate).unwrap());

        let mut rejected_in_place = elements.clone();
        rejected_in_place.reject_in_place(predicate).unwrap();
        prop_assert_eq!(rejected_in_place, elements.rejected(predicate).unwrap());

        let mut mapped_in_place = elements.clone();
        mapped_in_place.map_in_place(|n| Some(n.wrapping_sub(1))).unwrap();
        prop_assert_eq!(mapped_in_place, elements.mapped(|n| Some(n.wrapping_sub(1))).unwrap());
    }
}

#[test]
fn test_seedless_reduce_on_empty_is_the_defined_failure() {
    let elements: Vec<i32> = Vec::new();
    assert_eq!(
        elements.reduced_first(|accumulator, n| accumulator + n),
        Err(TraverseError::EmptySource)
    );
}
