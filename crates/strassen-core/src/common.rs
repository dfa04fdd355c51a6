//! Common utilities: worker pools and first-error bookkeeping for fork/join.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rayon::ThreadPoolBuilder;

use crate::error::CoreError;

/// Run `f` on a dedicated pool of `max_threads` workers, or on the rayon
/// global pool when `max_threads` is 0.
///
/// The requested size is capped at `default_parallelism()`.
pub fn run_in_pool<T, F>(max_threads: usize, f: F) -> Result<T, CoreError>
where
    T: Send,
    F: FnOnce() -> Result<T, CoreError> + Send,
{
    if max_threads == 0 {
        return f();
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(semaphore_concurrency(Some(max_threads)))
        .thread_name(|i| format!("strassen-worker-{i}"))
        .build()
        .map_err(|e| CoreError::Config(format!("failed to create thread pool: {e}")))?;

    pool.install(f)
}

/// First-error-wins record shared by every task of one call tree.
///
/// The first failing task stores its error and raises the flag; tasks that
/// see the flag bail out with `Cancelled`, which is never stored over the
/// original error.
pub(crate) struct FirstError {
    failed: AtomicBool,
    error: Mutex<Option<CoreError>>,
}

impl FirstError {
    pub(crate) fn new() -> Self {
        Self {
            failed: AtomicBool::new(false),
            error: Mutex::new(None),
        }
    }

    /// Whether some task of this tree has already failed.
    #[inline]
    pub(crate) fn has_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    /// Record `err` unless an earlier error is already stored.
    pub(crate) fn record(&self, err: &CoreError) {
        let mut slot = self.error.lock();
        if slot.is_none() {
            *slot = Some(err.clone());
        }
        drop(slot);
        self.failed.store(true, Ordering::Release);
    }

    /// The stored first error, or `fallback` if nothing was recorded.
    pub(crate) fn into_first(self, fallback: CoreError) -> CoreError {
        self.error.into_inner().unwrap_or(fallback)
    }
}

/// Get the default parallelism level (2 * `num_cpus`).
#[must_use]
pub fn default_parallelism() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4);
    cpus * 2
}

/// Get the semaphore-limited concurrency (capped at 2 * `num_cpus`).
#[must_use]
pub fn semaphore_concurrency(requested: Option<usize>) -> usize {
    let max = default_parallelism();
    match requested {
        Some(n) if n > 0 => n.min(max),
        _ => max,
    }
}
