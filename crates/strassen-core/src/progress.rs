//! Cooperative cancellation tokens.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::CoreError;

/// Cooperative cancellation token using an atomic flag.
///
/// # Example
/// ```
/// use strassen_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<(Instant, Duration)>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// A token that also expires once `timeout` has elapsed.
    ///
    /// Clones share the manual flag and the deadline.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some((Instant::now() + timeout, timeout)),
        }
    }

    /// Check if cancellation has been requested or the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.is_expired()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|(d, _)| Instant::now() >= d)
    }

    /// Check for cancellation, returning an error if cancelled.
    ///
    /// Manual cancellation wins over an expired deadline.
    /// ```
    /// use std::time::Duration;
    /// use strassen_core::progress::CancellationToken;
    /// use strassen_core::CoreError;
    ///
    /// let token = CancellationToken::with_timeout(Duration::ZERO);
    /// assert!(matches!(token.check_cancelled(), Err(CoreError::Timeout(_))));
    ///
    /// token.cancel();
    /// assert_eq!(token.check_cancelled(), Err(CoreError::Cancelled));
    /// ```
    pub fn check_cancelled(&self) -> Result<(), CoreError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(CoreError::Cancelled);
        }
        if let Some((deadline, timeout)) = self.deadline {
            if Instant::now() >= deadline {
                return Err(CoreError::Timeout(format!("{timeout:?}")));
            }
        }
        Ok(())
    }

    /// Time left before the deadline, `None` for tokens without one.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|(d, _)| d.saturating_duration_since(Instant::now()))
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
