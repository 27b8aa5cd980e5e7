//! The executor abstraction: run independent units of work, join on all.
//!
//! The engine is decoupled from any specific threading primitive. It hands
//! an executor one boxed task per chunk and expects a single join barrier:
//! [`Executor::run_all`] returns only once every task has run. Where the
//! tasks actually execute — worker threads, a rayon pool, or even the
//! calling thread — is the executor's business; result ordering never
//! depends on it, because each task writes to its own pre-assigned slot.

#[cfg(feature = "threads")]
mod threads;

#[cfg(feature = "rayon")]
mod rayon;

#[cfg(feature = "threads")]
pub use threads::Threads;

/// One unit of work: the evaluation of a single chunk.
///
/// Tasks never unwind — the engine catches callable panics before handing
/// tasks out — so executors need no poisoning or unwind handling of their
/// own.
pub type Task<'task> = Box<dyn FnOnce() + Send + 'task>;

/// An external service that runs independent units of work and can be
/// joined on their completion.
///
/// # Contract
///
/// `run_all` must invoke every task exactly once and return only after all
/// of them have finished. Tasks are independent: they share no state and
/// may run in any order, on any thread, with any degree of concurrency.
/// An executor that drops a task causes the engine to fail the call with
/// [`TraverseError::ChunkLost`](crate::TraverseError::ChunkLost).
///
/// # Examples
///
/// An executor is just "run these, then come back"; the simplest conforming
/// implementation runs everything inline:
///
/// ```rust
/// use sifter::{Executor, Task};
///
/// struct Inline;
///
/// impl Executor for Inline {
///     fn run_all(&self, tasks: Vec<Task<'_>>) {
///         for task in tasks {
///             task();
///         }
///     }
/// }
/// ```
pub trait Executor {
    /// Runs every task and returns once all of them have completed.
    fn run_all(&self, tasks: Vec<Task<'_>>);
}
