//! Traversal operations over ordered sequences.
//!
//! [`SequenceFilters`] builds new collections from a slice;
//! [`SequenceFiltersMut`] replaces a `Vec`'s contents in place. Both come in
//! serial forms (no suffix) and configurable forms (`_with`, taking a
//! [`Dispatch`]) that may run chunks on an executor. Element order is always
//! definition order: the configurable forms produce output identical to the
//! serial forms no matter how chunks are scheduled.

use std::mem;

use crate::dispatch::Dispatch;
use crate::engine::chunk::DEFAULT_STRIDE;
use crate::engine::{merge, task};
use crate::error::TraverseError;

/// Builds the map kernel: exactly one output per element, `None` is the
/// absent-mapping contract violation.
fn map_kernel<T, U, F>(transform: F) -> impl Fn(usize, &T) -> Result<Option<U>, TraverseError>
where
    F: Fn(&T) -> Option<U>,
{
    move |index, element| match transform(element) {
        Some(value) => Ok(Some(value)),
        None => Err(TraverseError::AbsentMapping { index }),
    }
}

/// Builds the select/reject kernel over cloned elements. `keep_when` is
/// `true` for select and `false` for reject.
fn filter_kernel<T, F>(
    predicate: F,
    keep_when: bool,
) -> impl Fn(usize, &T) -> Result<Option<T>, TraverseError>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |_, element| Ok((predicate(element) == keep_when).then(|| element.clone()))
}

/// Builds the keep-mask kernel for the in-place predicate forms: one `bool`
/// per element, no cloning.
fn mask_kernel<T, F>(predicate: F) -> impl Fn(usize, &T) -> Result<Option<bool>, TraverseError>
where
    F: Fn(&T) -> bool,
{
    move |_, element| Ok(Some(predicate(element)))
}

/// Keeps the elements whose mask entry equals `keep_when`, preserving order.
fn apply_mask<T>(source: Vec<T>, mask: &[bool], keep_when: bool) -> Vec<T> {
    source
        .into_iter()
        .zip(mask)
        .filter_map(|(element, keep)| (*keep == keep_when).then_some(element))
        .collect()
}

/// Map, select, reject, and reduce over an ordered sequence, building new
/// collections.
///
/// Implemented for `[T]`, so every method is available on slices, arrays,
/// and `Vec<T>`. The source is never mutated.
///
/// # Examples
///
/// ```rust
/// use sifter::prelude::*;
///
/// let words = vec!["alpha", "beta", "gamma"];
///
/// let lengths = words.mapped(|word| Some(word.len()))?;
/// assert_eq!(lengths, vec![5, 4, 5]);
///
/// let short = words.selected(|word| word.len() < 5)?;
/// assert_eq!(short, vec!["beta"]);
/// # Ok::<(), sifter::TraverseError>(())
/// ```
pub trait SequenceFilters<T> {
    /// Transforms every element, serially, into a new `Vec`.
    ///
    /// The transform must produce exactly one value per element; returning
    /// `None` fails the whole call with
    /// [`TraverseError::AbsentMapping`] and no collection is returned.
    fn mapped<U, F>(&self, transform: F) -> Result<Vec<U>, TraverseError>
    where
        F: Fn(&T) -> Option<U>;

    /// Transforms every element under the given [`Dispatch`].
    ///
    /// With an executor, chunks run concurrently and the call blocks until
    /// all of them finish; output order is identical to [`mapped`]
    /// regardless of completion order.
    ///
    /// [`mapped`]: SequenceFilters::mapped
    fn mapped_with<U, F>(
        &self,
        dispatch: Dispatch<'_>,
        transform: F,
    ) -> Result<Vec<U>, TraverseError>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Option<U> + Sync;

    /// The subsequence of elements for which the predicate holds, in
    /// original order.
    fn selected<F>(&self, predicate: F) -> Result<Vec<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool;

    /// [`selected`](SequenceFilters::selected) under the given [`Dispatch`].
    fn selected_with<F>(
        &self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<Vec<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync;

    /// The complement of [`selected`](SequenceFilters::selected) for the
    /// same predicate: the elements for which it does not hold.
    ///
    /// For any predicate, `selected` and `rejected` partition the source
    /// exactly — every element lands in one output or the other.
    fn rejected<F>(&self, predicate: F) -> Result<Vec<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool;

    /// [`rejected`](SequenceFilters::rejected) under the given [`Dispatch`].
    fn rejected_with<F>(
        &self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<Vec<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync;

    /// Left fold in definition order, seeded with `initial`.
    ///
    /// Always sequential — each step depends on the previous accumulator,
    /// so there is nothing to chunk. An empty sequence returns `initial`.
    fn reduced<A, F>(&self, initial: A, combine: F) -> Result<A, TraverseError>
    where
        F: FnMut(A, &T) -> A;

    /// Left fold seeded with the first element.
    ///
    /// Fails with [`TraverseError::EmptySource`] on an empty sequence.
    fn reduced_first<F>(&self, combine: F) -> Result<T, TraverseError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T;
}

impl<T> SequenceFilters<T> for [T] {
    fn mapped<U, F>(&self, transform: F) -> Result<Vec<U>, TraverseError>
    where
        F: Fn(&T) -> Option<U>,
    {
        let parts = task::run_inline(self, DEFAULT_STRIDE, map_kernel(transform))?;
        Ok(merge::concat(parts))
    }

    fn mapped_with<U, F>(
        &self,
        dispatch: Dispatch<'_>,
        transform: F,
    ) -> Result<Vec<U>, TraverseError>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Option<U> + Sync,
    {
        let parts = task::run(
            self,
            dispatch.stride_bound(),
            dispatch.executor(),
            map_kernel(transform),
        )?;
        Ok(merge::concat(parts))
    }

    fn selected<F>(&self, predicate: F) -> Result<Vec<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        let parts = task::run_inline(self, DEFAULT_STRIDE, filter_kernel(predicate, true))?;
        Ok(merge::concat(parts))
    }

    fn selected_with<F>(
        &self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<Vec<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let parts = task::run(
            self,
            dispatch.stride_bound(),
            dispatch.executor(),
            filter_kernel(predicate, true),
        )?;
        Ok(merge::concat(parts))
    }

    fn rejected<F>(&self, predicate: F) -> Result<Vec<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        let parts = task::run_inline(self, DEFAULT_STRIDE, filter_kernel(predicate, false))?;
        Ok(merge::concat(parts))
    }

    fn rejected_with<F>(
        &self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<Vec<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let parts = task::run(
            self,
            dispatch.stride_bound(),
            dispatch.executor(),
            filter_kernel(predicate, false),
        )?;
        Ok(merge::concat(parts))
    }

    fn reduced<A, F>(&self, initial: A, combine: F) -> Result<A, TraverseError>
    where
        F: FnMut(A, &T) -> A,
    {
        crate::engine::fold::fold(self.iter(), initial, combine)
    }

    fn reduced_first<F>(&self, combine: F) -> Result<T, TraverseError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        crate::engine::fold::fold_first(self.iter(), combine)
    }
}

/// In-place map, select, and reject over a `Vec`.
///
/// Every operation computes its result through the same engine as the
/// immutable forms and then replaces the vector's contents wholesale; there
/// is no element-by-element rewrite that another observer could see
/// half-applied. On failure the vector is left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use sifter::prelude::*;
///
/// let mut numbers = vec![1, 2, 3, 4, 5];
/// numbers.reject_in_place(|n| n % 2 == 0)?;
/// assert_eq!(numbers, vec![1, 3, 5]);
/// # Ok::<(), sifter::TraverseError>(())
/// ```
pub trait SequenceFiltersMut<T> {
    /// Replaces every element with its transform, serially.
    fn map_in_place<F>(&mut self, transform: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> Option<T>;

    /// [`map_in_place`](SequenceFiltersMut::map_in_place) under the given
    /// [`Dispatch`].
    fn map_in_place_with<F>(
        &mut self,
        dispatch: Dispatch<'_>,
        transform: F,
    ) -> Result<(), TraverseError>
    where
        T: Send + Sync,
        F: Fn(&T) -> Option<T> + Sync;

    /// Keeps only the elements for which the predicate holds.
    fn select_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool;

    /// [`select_in_place`](SequenceFiltersMut::select_in_place) under the
    /// given [`Dispatch`].
    fn select_in_place_with<F>(
        &mut self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync;

    /// Drops the elements for which the predicate holds.
    fn reject_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool;

    /// [`reject_in_place`](SequenceFiltersMut::reject_in_place) under the
    /// given [`Dispatch`].
    fn reject_in_place_with<F>(
        &mut self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync;
}

impl<T> SequenceFiltersMut<T> for Vec<T> {
    fn map_in_place<F>(&mut self, transform: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> Option<T>,
    {
        let parts = task::run_inline(self.as_slice(), DEFAULT_STRIDE, map_kernel(transform))?;
        *self = merge::concat(parts);
        Ok(())
    }

    fn map_in_place_with<F>(
        &mut self,
        dispatch: Dispatch<'_>,
        transform: F,
    ) -> Result<(), TraverseError>
    where
        T: Send + Sync,
        F: Fn(&T) -> Option<T> + Sync,
    {
        let parts = task::run(
            self.as_slice(),
            dispatch.stride_bound(),
            dispatch.executor(),
            map_kernel(transform),
        )?;
        *self = merge::concat(parts);
        Ok(())
    }

    fn select_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool,
    {
        let parts = task::run_inline(self.as_slice(), DEFAULT_STRIDE, mask_kernel(predicate))?;
        let mask = merge::concat(parts);
        *self = apply_mask(mem::take(self), &mask, true);
        Ok(())
    }

    fn select_in_place_with<F>(
        &mut self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let parts = task::run(
            self.as_slice(),
            dispatch.stride_bound(),
            dispatch.executor(),
            mask_kernel(predicate),
        )?;
        let mask = merge::concat(parts);
        *self = apply_mask(mem::take(self), &mask, true);
        Ok(())
    }

    fn reject_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool,
    {
        let parts = task::run_inline(self.as_slice(), DEFAULT_STRIDE, mask_kernel(predicate))?;
        let mask = merge::concat(parts);
        *self = apply_mask(mem::take(self), &mask, false);
        Ok(())
    }

    fn reject_in_place_with<F>(
        &mut self,
        dispatch: Dispatch<'_>,
        predicate: F,
    ) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let parts = task::run(
            self.as_slice(),
            dispatch.stride_bound(),
            dispatch.executor(),
            mask_kernel(predicate),
        )?;
        let mask = merge::concat(parts);
        *self = apply_mask(mem::take(self), &mask, false);
        Ok(())
    }
}
