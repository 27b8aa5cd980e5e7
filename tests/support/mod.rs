//! Test executors with controllable scheduling.
//!
//! These implement [`Executor`] on the calling thread so tests can force a
//! specific completion order (or misbehave deliberately) without any real
//! concurrency.

#![allow(dead_code)]

use sifter::{Executor, Task};

/// Runs tasks in submission order.
pub static IN_ORDER: InOrder = InOrder;

/// Runs tasks in reverse submission order.
pub static REVERSE_ORDER: ReverseOrder = ReverseOrder;

/// Runs odd-ordinal tasks before even-ordinal ones.
pub static INTERLEAVED: Interleaved = Interleaved;

/// Runs tasks in submission order.
pub struct InOrder;

impl Executor for InOrder {
    fn run_all(&self, tasks: Vec<Task<'_>>) {
        for task in tasks {
            task();
        }
    }
}

/// Runs tasks in reverse submission order, so later chunks always finish
/// before earlier ones.
pub struct ReverseOrder;

impl Executor for ReverseOrder {
    fn run_all(&self, tasks: Vec<Task<'_>>) {
        for task in tasks.into_iter().rev() {
            task();
        }
    }
}

/// Runs odd-ordinal tasks first, then even-ordinal ones.
pub struct Interleaved;

impl Executor for Interleaved {
    fn run_all(&self, tasks: Vec<Task<'_>>) {
        let (even, odd): (Vec<_>, Vec<_>) = tasks
            .into_iter()
            .enumerate()
            .partition(|(ordinal, _)| ordinal % 2 == 0);
        for (_, task) in odd.into_iter().chain(even) {
            task();
        }
    }
}

/// A broken executor that silently drops the task at `ordinal`.
pub struct DropsOne {
    pub ordinal: usize,
}

impl Executor for DropsOne {
    fn run_all(&self, tasks: Vec<Task<'_>>) {
        for (ordinal, task) in tasks.into_iter().enumerate() {
            if ordinal != self.ordinal {
                task();
            }
        }
    }
}
