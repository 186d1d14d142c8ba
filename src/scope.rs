//! Task scope bound to a view's lifetime.
//!
//! Tasks launched on a [`ViewScope`] are fire-and-forget: no result is
//! returned to the caller. Dropping the scope aborts every task that has
//! not completed yet.

use std::future::Future;

use tokio::task::JoinSet;

pub struct ViewScope {
    name: &'static str,
    tasks: JoinSet<()>,
}

impl ViewScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: JoinSet::new(),
        }
    }

    /// Spawn a task on the scope without waiting for it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.reap();
        self.tasks.spawn(task);
    }

    /// Number of tasks not yet reaped
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Abort every outstanding task
    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!("{}: cancelling {} task(s)", self.name, self.tasks.len());
        }
        self.tasks.abort_all();
    }

    /// Wait until every launched task has finished
    #[cfg(test)]
    pub async fn settle(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            self.log_outcome(result);
        }
    }

    /// Drop finished tasks, logging panics
    fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            self.log_outcome(result);
        }
    }

    fn log_outcome(&self, result: Result<(), tokio::task::JoinError>) {
        if let Err(e) = result {
            if e.is_panic() {
                tracing::error!("{}: task panicked: {}", self.name, e);
            }
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
