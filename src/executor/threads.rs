//! A scoped-thread worker pool executor.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::thread;

use parking_lot::Mutex;

use super::{Executor, Task};

/// An [`Executor`] backed by scoped OS threads.
///
/// Each call to [`run_all`](Executor::run_all) spawns up to `workers`
/// threads (never more than there are tasks) that drain a shared task
/// queue, then joins them all before returning. Threads are scoped to the
/// call, so tasks may borrow from the caller's stack and no pool state
/// outlives the call.
///
/// # Examples
///
/// ```rust
/// use sifter::prelude::*;
///
/// let numbers: Vec<i32> = (1..=100).collect();
/// let pool = Threads::new();
///
/// let even = numbers.selected_with(Dispatch::on(&pool), |n| n % 2 == 0)?;
/// assert_eq!(even.len(), 50);
/// # Ok::<(), sifter::TraverseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Threads {
    workers: NonZeroUsize,
}

impl Threads {
    /// Creates a pool sized to the number of available CPUs.
    pub fn new() -> Self {
        let workers = NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN);
        Self { workers }
    }

    /// Creates a pool with an explicit worker count.
    pub const fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// The maximum number of worker threads a call will spawn.
    pub const fn workers(&self) -> NonZeroUsize {
        self.workers
    }
}

impl Default for Threads {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for Threads {
    fn run_all(&self, tasks: Vec<Task<'_>>) {
        let workers = self.workers.get().min(tasks.len());
        if workers <= 1 {
            for task in tasks {
                task();
            }
            return;
        }

        let queue = Mutex::new(tasks.into_iter().collect::<VecDeque<_>>());
        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    loop {
                        let Some(task) = queue.lock().pop_front() else {
                            break;
                        };
                        task();
                    }
                });
            }
        });
    }
}
