use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::error::Result;

/// Fixed number of execution slots shared by every task spawned through it.
///
/// `spawn` never waits: the task is handed to the runtime straight away and
/// parks on the semaphore until a slot frees up. Slots are granted in
/// submission order. A task that can't get a slot because the pool was
/// closed resolves to `Error::PoolClosed` without running.
#[derive(Clone)]
pub struct WorkerPool {
    slots: Arc<Semaphore>,
    capacity: usize,
}

impl WorkerPool {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        WorkerPool { slots: Arc::new(Semaphore::new(capacity)), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn spawn<F, T>(&self, task: F) -> JoinHandle<Result<T>>
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let slots = self.slots.clone();
        tokio::spawn(async move {
            let _permit = slots.acquire_owned().await?;
            task.await
        })
    }

    /// Tasks still waiting for a slot fail instead of running.
    #[cfg(test)]
    pub(crate) fn close(&self) {
        self.slots.close();
    }
}
