//! Session-wide memo with a single in-flight computation

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;
use tracing::debug;

/// Holds one value per session.
///
/// Concurrent callers of [`Memo::get_or_init`] share a single computation.
/// [`Memo::reset`] swaps in an empty cell; computations already running keep
/// delivering to their own callers.
pub(crate) struct Memo<T> {
    cell: Mutex<Arc<OnceCell<T>>>,
}

impl<T: Clone> Memo<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: Mutex::new(Arc::new(OnceCell::new())),
        }
    }

    fn lock_cell(&self) -> MutexGuard<'_, Arc<OnceCell<T>>> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current(&self) -> Arc<OnceCell<T>> {
        Arc::clone(&self.lock_cell())
    }

    pub(crate) async fn get_or_init<F, Fut>(&self, init: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let cell = self.current();
        cell.get_or_init(init).await.clone()
    }

    pub(crate) fn get(&self) -> Option<T> {
        self.current().get().cloned()
    }

    pub(crate) fn reset(&self) {
        debug!("Resetting memoized value");
        *self.lock_cell() = Arc::new(OnceCell::new());
    }
}

impl<T: Clone> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}
