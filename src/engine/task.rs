//! Task dispatch: evaluating a kernel over every chunk of a source slice.
//!
//! The kernel is called once per element and may emit zero or one output
//! values; map facades emit exactly one, select/reject facades emit one for
//! kept elements and none otherwise. Dispatch has two paths with identical
//! observable semantics:
//!
//! - **inline** — no executor: chunks are evaluated on the calling thread,
//!   in ordinal order, stopping at the first failure.
//! - **pooled** — one boxed task per chunk is handed to the executor and the
//!   calling thread blocks until every task has run (a single fork/join
//!   barrier per call). Each task writes only its own pre-allocated slot, so
//!   the parallel phase needs no locks; all inspection happens after the
//!   join, on the calling thread.
//!
//! Failure policy: the first failure in ordinal order is the error for the
//! whole call. Outstanding sibling tasks run to completion but their output
//! is discarded. Panics in the kernel are caught at the chunk boundary on
//! both paths, so a panicking callable is reported as
//! [`TraverseError::CallablePanicked`] rather than unwinding through the
//! caller (or poisoning a worker thread).
//!
//! Precondition, documented rather than enforced: the source slice must not
//! be mutated by anything else while a call is outstanding.

use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::engine::chunk::{self, Chunk};
use crate::error::TraverseError;
use crate::executor::{Executor, Task};

/// One partial output per chunk, in ascending ordinal order.
pub(crate) type Parts<O> = Vec<Vec<O>>;

/// Dispatches on executor presence: inline when absent, pooled when present.
pub(crate) fn run<T, O, K>(
    source: &[T],
    stride: NonZeroUsize,
    executor: Option<&dyn Executor>,
    kernel: K,
) -> Result<Parts<O>, TraverseError>
where
    T: Sync,
    O: Send,
    K: Fn(usize, &T) -> Result<Option<O>, TraverseError> + Sync,
{
    match executor {
        None => run_inline(source, stride, kernel),
        Some(executor) => run_pooled(source, stride, executor, kernel),
    }
}

/// Evaluates every chunk sequentially on the calling thread, in chunk order.
pub(crate) fn run_inline<T, O, K>(
    source: &[T],
    stride: NonZeroUsize,
    kernel: K,
) -> Result<Parts<O>, TraverseError>
where
    K: Fn(usize, &T) -> Result<Option<O>, TraverseError>,
{
    let chunks = chunk::plan(source.len(), stride);
    let mut parts = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        parts.push(evaluate(source, chunk, &kernel)?);
    }
    Ok(parts)
}

/// Submits one task per chunk to the executor and blocks until all complete.
pub(crate) fn run_pooled<T, O, K>(
    source: &[T],
    stride: NonZeroUsize,
    executor: &dyn Executor,
    kernel: K,
) -> Result<Parts<O>, TraverseError>
where
    T: Sync,
    O: Send,
    K: Fn(usize, &T) -> Result<Option<O>, TraverseError> + Sync,
{
    let chunks = chunk::plan(source.len(), stride);
    if chunks.is_empty() {
        return Ok(Vec::new());
    }

    let mut slots: Vec<Option<Result<Vec<O>, TraverseError>>> = Vec::with_capacity(chunks.len());
    slots.resize_with(chunks.len(), || None);

    let kernel = &kernel;
    let mut tasks: Vec<Task<'_>> = Vec::with_capacity(chunks.len());
    for (chunk, slot) in chunks.iter().zip(slots.iter_mut()) {
        let chunk = *chunk;
        tasks.push(Box::new(move || {
            *slot = Some(evaluate(source, &chunk, kernel));
        }));
    }
    executor.run_all(tasks);

    let mut parts = Vec::with_capacity(chunks.len());
    for (ordinal, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(Ok(part)) => parts.push(part),
            Some(Err(error)) => return Err(error),
            None => return Err(TraverseError::ChunkLost { ordinal }),
        }
    }
    Ok(parts)
}

/// Applies the kernel to every element of one chunk, capturing panics.
fn evaluate<T, O, K>(source: &[T], chunk: &Chunk, kernel: &K) -> Result<Vec<O>, TraverseError>
where
    K: Fn(usize, &T) -> Result<Option<O>, TraverseError>,
{
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut output = Vec::with_capacity(chunk.len());
        for index in chunk.range() {
            if let Some(value) = kernel(index, &source[index])? {
                output.push(value);
            }
        }
        Ok(output)
    }));
    match outcome {
        Ok(result) => result,
        Err(payload) => Err(TraverseError::CallablePanicked {
            detail: panic_detail(payload.as_ref()),
        }),
    }
}

pub(crate) fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
