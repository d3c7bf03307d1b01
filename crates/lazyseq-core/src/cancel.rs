//! Cancellation signal shared between a caller and the cancellable bridge.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

use crate::error::SeqError;

struct Shared {
    cancelled: AtomicBool,
    // Dropped on cancel; that disconnects `done` for every clone at once.
    trigger: Mutex<Option<Sender<()>>>,
    done: Receiver<()>,
}

/// One-shot, monotonic cancellation signal with an optional deadline.
///
/// Clones share the same flag. Once cancelled (or once the deadline has
/// passed) a token stays cancelled.
///
/// # Example
/// ```
/// use lazyseq_core::CancellationToken;
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
    shared: Arc<Shared>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a new, unfired token without a deadline.
    #[must_use]
    pub fn new() -> Self {
        let (trigger, done) = crossbeam_channel::bounded(0);
        Self {
            shared: Arc::new(Shared {
                cancelled: AtomicBool::new(false),
                trigger: Mutex::new(Some(trigger)),
                done,
            }),
            deadline: None,
        }
    }

    /// Create a token that cancels itself once `timeout` has elapsed.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Create a token that cancels itself at `deadline`.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::new()
        }
    }

    /// Check if cancellation has been requested or the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire) || self.is_expired()
    }

    /// Request cancellation. Calling it again has no further effect.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::Release);
        drop(self.shared.trigger.lock().take());
    }

    /// Channel that becomes permanently ready (disconnected) on `cancel()`.
    ///
    /// Meant for `crossbeam_channel::select!`. The deadline is not
    /// reflected here; see [`deadline_channel`](Self::deadline_channel).
    #[must_use]
    pub fn done(&self) -> &Receiver<()> {
        &self.shared.done
    }

    /// Timer channel that fires at the deadline, or never if there is none.
    #[must_use]
    pub fn deadline_channel(&self) -> Receiver<Instant> {
        self.deadline
            .map_or_else(crossbeam_channel::never, crossbeam_channel::at)
    }

    /// The absolute deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when there is no deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Check for cancellation, returning an error if cancelled.
    ///
    /// Explicit cancellation takes precedence over an expired deadline.
    pub fn check_cancelled(&self) -> Result<(), SeqError> {
        if self.shared.cancelled.load(Ordering::Acquire) {
            return Err(SeqError::Cancelled);
        }
        if self.is_expired() {
            return Err(SeqError::Timeout("deadline reached".to_string()));
        }
        Ok(())
    }

    fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.shared.cancelled.load(Ordering::Acquire))
            .field("deadline", &self.deadline)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::TryRecvError;

    use super::*;

    #[test]
    fn cancellation_token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn check_cancelled_ok() {
        let token = CancellationToken::new();
        assert!(token.check_cancelled().is_ok());
    }

    #[test]
    fn check_cancelled_err() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(token.check_cancelled(), Err(SeqError::Cancelled)));
    }

    #[test]
    fn done_channel_blocks_until_cancel() {
        let token = CancellationToken::new();
        assert!(matches!(token.done().try_recv(), Err(TryRecvError::Empty)));
        assert!(token.done().recv_timeout(Duration::from_millis(5)).is_err());
        token.cancel();
        // Disconnected: ready immediately, every time.
        assert!(token.done().recv().is_err());
        assert!(token.done().recv().is_err());
    }

    #[test]
    fn done_channel_observed_from_another_thread() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = std::thread::spawn(move || waiter.done().recv().is_err());
        std::thread::sleep(Duration::from_millis(5));
        token.cancel();
        assert!(handle.join().unwrap());
    }

    #[test]
    fn timeout_token_not_expired() {
        let token = CancellationToken::with_timeout(Duration::from_secs(60));
        assert!(!token.is_cancelled());
        assert!(token.check_cancelled().is_ok());
        assert!(token.remaining().unwrap() > Duration::from_secs(0));
    }

    #[test]
    fn timeout_token_manual_cancel() {
        let token = CancellationToken::with_timeout(Duration::from_secs(60));
        token.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(SeqError::Cancelled)));
    }

    #[test]
    fn timeout_token_expired() {
        let token = CancellationToken::with_timeout(Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(1));
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(SeqError::Timeout(_))));
        assert_eq!(token.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn deadline_channel_fires() {
        let token = CancellationToken::with_timeout(Duration::from_millis(1));
        assert!(token.deadline_channel().recv().is_ok());

        let untimed = CancellationToken::new();
        assert!(untimed.deadline().is_none());
        assert!(untimed
            .deadline_channel()
            .recv_timeout(Duration::from_millis(5))
            .is_err());
    }

    #[test]
    fn separate_tokens_cancel_independently() {
        let outer = CancellationToken::with_timeout(Duration::from_secs(60));
        let inner = CancellationToken::with_timeout(Duration::from_secs(1));
        inner.cancel();
        assert!(inner.is_cancelled());
        assert!(!outer.is_cancelled());
        assert!(matches!(outer.done().try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn cancellation_propagates_through_clone() {
        let token1 = CancellationToken::new();
        let token2 = token1.clone();
        token1.cancel();
        assert!(token2.is_cancelled());
    }
}
