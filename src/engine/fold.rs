//! The reducer: strictly sequential folds.
//!
//! Reduce is never chunked — each step depends on the previous accumulator,
//! so there is nothing to parallelize. Canonical order is definition order
//! for sequences and the per-call iteration order for sets. Combiner panics
//! are caught and reported the same way the dispatcher reports them, so
//! every callable failure in the crate surfaces as
//! [`TraverseError::CallablePanicked`].

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::TraverseError;

/// Left fold with an explicit initial accumulator value.
///
/// An empty input returns `initial` unchanged.
pub(crate) fn fold<'item, T, A, F>(
    items: impl Iterator<Item = &'item T>,
    initial: A,
    combine: F,
) -> Result<A, TraverseError>
where
    T: 'item,
    F: FnMut(A, &'item T) -> A,
{
    let mut combine = combine;
    let mut items = items;
    catch_unwind(AssertUnwindSafe(move || {
        let mut accumulator = initial;
        for item in &mut items {
            accumulator = combine(accumulator, item);
        }
        accumulator
    }))
    .map_err(|payload| TraverseError::CallablePanicked {
        detail: super::task::panic_detail(payload.as_ref()),
    })
}

/// Left fold seeded by the first element in canonical order.
///
/// The remaining elements are folded into the clone of the first. An empty
/// input is a defined failure, [`TraverseError::EmptySource`].
pub(crate) fn fold_first<'item, T, F>(
    items: impl Iterator<Item = &'item T>,
    combine: F,
) -> Result<T, TraverseError>
where
    T: Clone + 'item,
    F: FnMut(T, &'item T) -> T,
{
    let mut items = items;
    let Some(seed) = items.next() else {
        return Err(TraverseError::EmptySource);
    };
    fold(items, seed.clone(), combine)
}
