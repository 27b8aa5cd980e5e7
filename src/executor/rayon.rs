//! Executor integration for rayon thread pools.

use super::{Executor, Task};

/// Runs each task as one rayon scope spawn and joins at scope exit.
///
/// Tasks never unwind (the engine catches callable panics first), so the
/// scope's panic propagation is never triggered.
impl Executor for ::rayon::ThreadPool {
    fn run_all(&self, tasks: Vec<Task<'_>>) {
        self.scope(|scope| {
            for task in tasks {
                scope.spawn(move |_| task());
            }
        });
    }
}
