//! Traversal operations over unordered sets.
//!
//! [`SetFilters`] builds new sets from a `HashSet`; [`SetFiltersMut`]
//! replaces a `HashSet`'s contents in place. Membership, not position, is
//! significant: mapped outputs collapse under the target's equality, so a
//! transform that produces fewer distinct values than it consumes yields a
//! smaller set. The parallel variants (`_on`) take an executor directly and
//! always chunk with the internal default stride — unordered collections do
//! not expose stride as an option.
//!
//! Canonical order — the order reduce folds in and the order elements are
//! presented to chunks — is the set's iteration order, which is stable for
//! the duration of a call but otherwise implementation-defined.

use std::collections::HashSet;
use std::hash::Hash;
use std::mem;

use crate::engine::chunk::DEFAULT_STRIDE;
use crate::engine::{merge, task};
use crate::error::TraverseError;
use crate::executor::Executor;

fn map_kernel<'source, T, U, F>(
    transform: F,
) -> impl Fn(usize, &&'source T) -> Result<Option<U>, TraverseError>
where
    F: Fn(&T) -> Option<U>,
{
    move |index, element| match transform(element) {
        Some(value) => Ok(Some(value)),
        None => Err(TraverseError::AbsentMapping { index }),
    }
}

fn filter_kernel<'source, T, F>(
    predicate: F,
    keep_when: bool,
) -> impl Fn(usize, &&'source T) -> Result<Option<T>, TraverseError>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |_, element| Ok((predicate(element) == keep_when).then(|| (*element).clone()))
}

fn mask_kernel<T, F>(predicate: F) -> impl Fn(usize, &T) -> Result<Option<bool>, TraverseError>
where
    F: Fn(&T) -> bool,
{
    move |_, element| Ok(Some(predicate(element)))
}

/// Map, select, reject, and reduce over an unordered set, building new
/// sets.
///
/// # Examples
///
/// ```rust
/// use sifter::prelude::*;
/// use std::collections::HashSet;
///
/// let numbers = HashSet::from([1, 2, 3, 4, 5]);
///
/// // Two inputs map to one output: the result is smaller than the source.
/// let halved = numbers.mapped(|n| Some(n / 2))?;
/// assert_eq!(halved, HashSet::from([0, 1, 2]));
///
/// let odd = numbers.rejected(|n| n % 2 == 0)?;
/// assert_eq!(odd, HashSet::from([1, 3, 5]));
/// # Ok::<(), sifter::TraverseError>(())
/// ```
pub trait SetFilters<T: Eq + Hash> {
    /// Transforms every member, serially, into a new set.
    ///
    /// Duplicate outputs collapse; the result's cardinality is at most the
    /// source's. A transform returning `None` fails the whole call.
    fn mapped<U, F>(&self, transform: F) -> Result<HashSet<U>, TraverseError>
    where
        U: Eq + Hash,
        F: Fn(&T) -> Option<U>;

    /// [`mapped`](SetFilters::mapped) with chunks run on `executor`.
    fn mapped_on<U, F>(&self, executor: &dyn Executor, transform: F) -> Result<HashSet<U>, TraverseError>
    where
        T: Sync,
        U: Eq + Hash + Send,
        F: Fn(&T) -> Option<U> + Sync;

    /// The subset of members for which the predicate holds.
    fn selected<F>(&self, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool;

    /// [`selected`](SetFilters::selected) with chunks run on `executor`.
    fn selected_on<F>(&self, executor: &dyn Executor, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync;

    /// The subset of members for which the predicate does not hold.
    fn rejected<F>(&self, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool;

    /// [`rejected`](SetFilters::rejected) with chunks run on `executor`.
    fn rejected_on<F>(&self, executor: &dyn Executor, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync;

    /// Left fold over the members in canonical (iteration) order, seeded
    /// with `initial`. Always sequential.
    fn reduced<A, F>(&self, initial: A, combine: F) -> Result<A, TraverseError>
    where
        F: FnMut(A, &T) -> A;

    /// Left fold seeded with the first member in canonical order.
    ///
    /// Fails with [`TraverseError::EmptySource`] on an empty set.
    fn reduced_first<F>(&self, combine: F) -> Result<T, TraverseError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T;
}

impl<T: Eq + Hash> SetFilters<T> for HashSet<T> {
    fn mapped<U, F>(&self, transform: F) -> Result<HashSet<U>, TraverseError>
    where
        U: Eq + Hash,
        F: Fn(&T) -> Option<U>,
    {
        let snapshot: Vec<&T> = self.iter().collect();
        let parts = task::run_inline(&snapshot, DEFAULT_STRIDE, map_kernel(transform))?;
        Ok(merge::union(parts))
    }

    fn mapped_on<U, F>(&self, executor: &dyn Executor, transform: F) -> Result<HashSet<U>, TraverseError>
    where
        T: Sync,
        U: Eq + Hash + Send,
        F: Fn(&T) -> Option<U> + Sync,
    {
        let snapshot: Vec<&T> = self.iter().collect();
        let parts = task::run_pooled(&snapshot, DEFAULT_STRIDE, executor, map_kernel(transform))?;
        Ok(merge::union(parts))
    }

    fn selected<F>(&self, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        let snapshot: Vec<&T> = self.iter().collect();
        let parts = task::run_inline(&snapshot, DEFAULT_STRIDE, filter_kernel(predicate, true))?;
        Ok(merge::union(parts))
    }

    fn selected_on<F>(&self, executor: &dyn Executor, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let snapshot: Vec<&T> = self.iter().collect();
        let parts =
            task::run_pooled(&snapshot, DEFAULT_STRIDE, executor, filter_kernel(predicate, true))?;
        Ok(merge::union(parts))
    }

    fn rejected<F>(&self, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        let snapshot: Vec<&T> = self.iter().collect();
        let parts = task::run_inline(&snapshot, DEFAULT_STRIDE, filter_kernel(predicate, false))?;
        Ok(merge::union(parts))
    }

    fn rejected_on<F>(&self, executor: &dyn Executor, predicate: F) -> Result<HashSet<T>, TraverseError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let snapshot: Vec<&T> = self.iter().collect();
        let parts =
            task::run_pooled(&snapshot, DEFAULT_STRIDE, executor, filter_kernel(predicate, false))?;
        Ok(merge::union(parts))
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

/// In-place map, select, and reject over a `HashSet`.
///
/// As with the sequence forms, new contents are computed through the engine
/// and swapped in wholesale after the join; on failure the set keeps its
/// original members.
///
/// # Examples
///
/// ```rust
/// use sifter::prelude::*;
/// use std::collections::HashSet;
///
/// let mut numbers = HashSet::from([1, 2, 3, 4]);
/// numbers.select_in_place(|n| n % 2 == 0)?;
/// assert_eq!(numbers, HashSet::from([2, 4]));
/// # Ok::<(), sifter::TraverseError>(())
/// ```
pub trait SetFiltersMut<T: Eq + Hash> {
    /// Replaces every member with its transform.
    fn map_in_place<F>(&mut self, transform: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> Option<T>;

    /// [`map_in_place`](SetFiltersMut::map_in_place) with chunks run on
    /// `executor`.
    fn map_in_place_on<F>(&mut self, executor: &dyn Executor, transform: F) -> Result<(), TraverseError>
    where
        T: Send + Sync,
        F: Fn(&T) -> Option<T> + Sync;

    /// Keeps only the members for which the predicate holds.
    fn select_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool;

    /// [`select_in_place`](SetFiltersMut::select_in_place) with chunks run
    /// on `executor`.
    fn select_in_place_on<F>(&mut self, executor: &dyn Executor, predicate: F) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync;

    /// Drops the members for which the predicate holds.
    fn reject_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool;

    /// [`reject_in_place`](SetFiltersMut::reject_in_place) with chunks run
    /// on `executor`.
    fn reject_in_place_on<F>(&mut self, executor: &dyn Executor, predicate: F) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync;
}

/// Rebuilds `set` from owned elements filtered by a keep-mask, restoring
/// the original members when the mask computation failed.
fn rebuild_filtered<T, E>(
    set: &mut HashSet<T>,
    elements: Vec<T>,
    outcome: Result<Vec<bool>, E>,
    keep_when: bool,
) -> Result<(), E>
where
    T: Eq + Hash,
{
    match outcome {
        Ok(mask) => {
            set.extend(
                elements
                    .into_iter()
                    .zip(mask)
                    .filter_map(|(element, keep)| (keep == keep_when).then_some(element)),
            );
            Ok(())
        }
        Err(error) => {
            set.extend(elements);
            Err(error)
        }
    }
}

impl<T: Eq + Hash> SetFiltersMut<T> for HashSet<T> {
    fn map_in_place<F>(&mut self, transform: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> Option<T>,
    {
        let parts = {
            let snapshot: Vec<&T> = self.iter().collect();
            task::run_inline(&snapshot, DEFAULT_STRIDE, map_kernel(transform))?
        };
        *self = merge::union(parts);
        Ok(())
    }

    fn map_in_place_on<F>(&mut self, executor: &dyn Executor, transform: F) -> Result<(), TraverseError>
    where
        T: Send + Sync,
        F: Fn(&T) -> Option<T> + Sync,
    {
        let parts = {
            let snapshot: Vec<&T> = self.iter().collect();
            task::run_pooled(&snapshot, DEFAULT_STRIDE, executor, map_kernel(transform))?
        };
        *self = merge::union(parts);
        Ok(())
    }

    fn select_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool,
    {
        let elements: Vec<T> = mem::take(self).into_iter().collect();
        let outcome = task::run_inline(&elements, DEFAULT_STRIDE, mask_kernel(predicate))
            .map(merge::concat);
        rebuild_filtered(self, elements, outcome, true)
    }

    fn select_in_place_on<F>(&mut self, executor: &dyn Executor, predicate: F) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let elements: Vec<T> = mem::take(self).into_iter().collect();
        let outcome = task::run_pooled(&elements, DEFAULT_STRIDE, executor, mask_kernel(predicate))
            .map(merge::concat);
        rebuild_filtered(self, elements, outcome, true)
    }

    fn reject_in_place<F>(&mut self, predicate: F) -> Result<(), TraverseError>
    where
        F: Fn(&T) -> bool,
    {
        let elements: Vec<T> = mem::take(self).into_iter().collect();
        let outcome = task::run_inline(&elements, DEFAULT_STRIDE, mask_kernel(predicate))
            .map(merge::concat);
        rebuild_filtered(self, elements, outcome, false)
    }

    fn reject_in_place_on<F>(&mut self, executor: &dyn Executor, predicate: F) -> Result<(), TraverseError>
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync,
    {
        let elements: Vec<T> = mem::take(self).into_iter().collect();
        let outcome = task::run_pooled(&elements, DEFAULT_STRIDE, executor, mask_kernel(predicate))
            .map(merge::concat);
        rebuild_filtered(self, elements, outcome, false)
    }
}
