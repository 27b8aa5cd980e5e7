//! Per-call execution configuration.

use std::num::NonZeroUsize;

use crate::engine::chunk::DEFAULT_STRIDE;
use crate::executor::Executor;

/// How one traversal call should execute: on which executor (if any) and
/// with what chunk stride.
///
/// The default is inline execution — no executor, every chunk evaluated on
/// the calling thread — with [`DEFAULT_STRIDE`]. Unordered-collection
/// operations do not take a `Dispatch` at all; their parallel variants
/// accept an executor directly and always use the default stride.
///
/// # Examples
///
/// ```rust
/// use sifter::prelude::*;
/// use std::num::NonZeroUsize;
///
/// let serial = Dispatch::inline();
/// assert!(serial.executor().is_none());
///
/// # #[cfg(feature = "threads")] {
/// let pool = Threads::new();
/// let parallel = Dispatch::on(&pool).stride(NonZeroUsize::new(32).unwrap());
/// assert_eq!(parallel.stride_bound().get(), 32);
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct Dispatch<'executor> {
    executor: Option<&'executor dyn Executor>,
    stride: NonZeroUsize,
}

impl Dispatch<'_> {
    /// Inline execution on the calling thread, default stride.
    pub const fn inline() -> Self {
        Self {
            executor: None,
            stride: DEFAULT_STRIDE,
        }
    }
}

impl<'executor> Dispatch<'executor> {
    /// Execution on the given executor, default stride.
    pub const fn on(executor: &'executor dyn Executor) -> Self {
        Self {
            executor: Some(executor),
            stride: DEFAULT_STRIDE,
        }
    }

    /// Replaces the stride bound: the maximum number of elements per chunk.
    ///
    /// A stride at least as large as the collection collapses the call to a
    /// single chunk.
    pub const fn stride(mut self, stride: NonZeroUsize) -> Self {
        self.stride = stride;
        self
    }

    /// The executor this call will run on, if any.
    pub const fn executor(&self) -> Option<&'executor dyn Executor> {
        self.executor
    }

    /// The configured stride bound.
    pub const fn stride_bound(&self) -> NonZeroUsize {
        self.stride
    }
}

impl Default for Dispatch<'_> {
    fn default() -> Self {
        Self::inline()
    }
}

impl std::fmt::Debug for Dispatch<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Dispatch")
            .field("executor", &self.executor.map(|_| "<dyn Executor>"))
            .field("stride", &self.stride)
            .finish()
    }
}
