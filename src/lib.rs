//! # sifter
//!
//! Chunked, optionally parallel map / select / reject / reduce over ordered
//! and unordered collections.
//!
//! ## Overview
//!
//! This library provides eager functional traversal operations as extension
//! traits over standard collections:
//!
//! - **map**: one output element per input element, via a transform
//! - **select**: the elements for which a predicate holds
//! - **reject**: the complement of select for the same predicate
//! - **reduce**: a sequential left fold to a single value
//!
//! Each operation comes in a serial form and a parallel form. The parallel
//! form splits the collection into fixed-size index ranges ("chunks"), runs
//! the callable over each chunk on an injected [`Executor`], blocks until
//! every chunk has finished, and reassembles the partial outputs in chunk
//! order — so the merged result is identical to a fully serial pass no
//! matter how the executor schedules the work.
//!
//! ## Example
//!
//! ```rust
//! use sifter::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let doubled = numbers.mapped(|n| Some(n * 2))?;
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let odd = numbers.rejected(|n| n % 2 == 0)?;
//! assert_eq!(odd, vec![1, 3, 5]);
//!
//! let sum = numbers.reduced(0, |accumulator, n| accumulator + n)?;
//! assert_eq!(sum, 15);
//! # Ok::<(), sifter::TraverseError>(())
//! ```
//!
//! Parallel execution only changes where the callable runs:
//!
//! ```rust
//! # #[cfg(feature = "threads")] {
//! use sifter::prelude::*;
//! use std::num::NonZeroUsize;
//!
//! let numbers: Vec<i64> = (0..1000).collect();
//! let pool = Threads::new();
//! let dispatch = Dispatch::on(&pool).stride(NonZeroUsize::new(64).unwrap());
//!
//! let doubled = numbers.mapped_with(dispatch, |n| Some(n * 2)).unwrap();
//! assert_eq!(doubled, numbers.mapped(|n| Some(n * 2)).unwrap());
//! # }
//! ```
//!
//! ## Failure model
//!
//! All operations are atomic: they either produce a complete result or fail
//! with a [`TraverseError`] and produce nothing. A map transform returning
//! `None`, a panicking callable, or a seedless reduce over an empty
//! collection all abort the whole call — even when sibling chunks have
//! already finished successfully, their output is discarded.
//!
//! ## Feature Flags
//!
//! - `threads` (default): the [`Threads`](executor::Threads) scoped-thread
//!   executor
//! - `rayon`: implements [`Executor`] for `rayon::ThreadPool`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the operation traits, the dispatch configuration, and the
/// executor surface.
///
/// # Usage
///
/// ```rust
/// use sifter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dispatch::Dispatch;
    pub use crate::error::TraverseError;
    pub use crate::executor::{Executor, Task};
    pub use crate::ops::sequence::{SequenceFilters, SequenceFiltersMut};
    pub use crate::ops::set::{SetFilters, SetFiltersMut};

    #[cfg(feature = "threads")]
    pub use crate::executor::Threads;
}

pub mod dispatch;
pub mod error;
pub mod executor;
pub mod ops;

mod engine;

pub use dispatch::Dispatch;
pub use engine::chunk::DEFAULT_STRIDE;
pub use error::TraverseError;
pub use executor::{Executor, Task};
