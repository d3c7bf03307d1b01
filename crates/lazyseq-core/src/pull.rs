//! Push-to-pull adaptation.
//!
//! A [`PullHandle`] runs a [`Sequence`] on a background thread and hands
//! its values out one `advance()` at a time. The producer thread blocks
//! inside its `accept` callback between values; two rendezvous channels
//! carry "give me the next value" requests one way and values the other.
//! Dropping the request sender is the stop signal: the producer's pending
//! `accept` returns `Break`, its `run` unwinds, and the thread exits.

use std::any::Any;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use std::thread::{self, JoinHandle, Scope, ScopedJoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::{trace, warn};

use crate::sequence::Sequence;

enum Worker<'scope> {
    Owned(JoinHandle<()>),
    Scoped(ScopedJoinHandle<'scope, ()>),
}

impl Worker<'_> {
    fn join(self) -> thread::Result<()> {
        match self {
            Worker::Owned(handle) => handle.join(),
            Worker::Scoped(handle) => handle.join(),
        }
    }
}

/// Imperative cursor over a sequence.
///
/// `advance` takes `&mut self`, so two overlapping pulls on one handle
/// cannot be expressed. The handle is released on [`release`](Self::release)
/// or on drop, whichever comes first.
///
/// # Example
/// ```
/// use lazyseq_core::{source, PullHandle};
///
/// let mut handle = PullHandle::spawn(source::iter(vec![10, 20, 30]));
/// assert_eq!(handle.advance(), Some(10));
/// assert_eq!(handle.advance(), Some(20));
/// handle.release();
/// assert_eq!(handle.advance(), None);
/// ```
pub struct PullHandle<'scope, T> {
    requests: Option<Sender<()>>,
    values: Receiver<T>,
    worker: Option<Worker<'scope>>,
}

impl<T: Send + 'static> PullHandle<'static, T> {
    /// Start pulling from an owned sequence on a background thread, joined
    /// on release.
    pub fn spawn<S>(seq: S) -> Self
    where
        S: Sequence<Item = T> + Send + 'static,
    {
        let (requests, request_rx) = crossbeam_channel::bounded(0);
        let (value_tx, values) = crossbeam_channel::bounded(0);
        let handle = thread::spawn(move || produce(&seq, &request_rx, &value_tx));
        trace!("pull handle spawned");
        Self {
            requests: Some(requests),
            values,
            worker: Some(Worker::Owned(handle)),
        }
    }
}

impl<'scope, T: Send + 'scope> PullHandle<'scope, T> {
    /// Start pulling from a borrowed sequence on a thread of `scope`.
    ///
    /// The handle must be released (or dropped) before the scope ends,
    /// otherwise the scope waits for a producer that is waiting for a
    /// request.
    pub fn scoped<'env, S>(scope: &'scope Scope<'scope, 'env>, seq: &'scope S) -> Self
    where
        S: Sequence<Item = T> + Sync + ?Sized,
    {
        let (requests, request_rx) = crossbeam_channel::bounded(0);
        let (value_tx, values) = crossbeam_channel::bounded(0);
        let handle = scope.spawn(move || produce(seq, &request_rx, &value_tx));
        trace!("scoped pull handle spawned");
        Self {
            requests: Some(requests),
            values,
            worker: Some(Worker::Scoped(handle)),
        }
    }
}

impl<T> PullHandle<'_, T> {
    /// Pull the next value, or `None` once the sequence is exhausted or the
    /// handle has been released. Keeps returning `None` after that.
    ///
    /// A panic raised by the producer is resumed on the calling thread.
    pub fn advance(&mut self) -> Option<T> {
        let requests = self.requests.as_ref()?;
        if requests.send(()).is_ok() {
            if let Ok(value) = self.values.recv() {
                return Some(value);
            }
        }
        // Producer finished (or died): reap it.
        if let Err(payload) = self.shutdown() {
            std::panic::resume_unwind(payload);
        }
        None
    }

    /// Stop the producer and join its thread. Idempotent.
    ///
    /// A panic raised by the producer while unwinding is resumed here.
    pub fn release(&mut self) {
        if let Err(payload) = self.shutdown() {
            std::panic::resume_unwind(payload);
        }
    }

    /// Like [`release`](Self::release), but a producer panic is logged
    /// instead of resumed. Used on drop paths, which may already be
    /// unwinding.
    pub(crate) fn release_quietly(&mut self) {
        if self.shutdown().is_err() {
            warn!("producer panicked while its pull handle was being released");
        }
    }

    /// Whether the handle has been released or has run dry.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.requests.is_none()
    }

    fn shutdown(&mut self) -> Result<(), Box<dyn Any + Send + 'static>> {
        // Dropping the sender wakes a producer parked in `accept`.
        self.requests = None;
        match self.worker.take() {
            Some(worker) => {
                let joined = worker.join();
                trace!(panicked = joined.is_err(), "pull handle released");
                joined
            }
            None => Ok(()),
        }
    }
}

impl<T> Drop for PullHandle<'_, T> {
    fn drop(&mut self) {
        self.release_quietly();
    }
}

impl<T> Iterator for PullHandle<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance()
    }
}

impl<T> FusedIterator for PullHandle<'_, T> {}

fn produce<S>(seq: &S, requests: &Receiver<()>, values: &Sender<S::Item>)
where
    S: Sequence + ?Sized,
{
    // Nothing is produced until the first request arrives, so a handle that
    // is released before any `advance()` never runs the sequence at all.
    if requests.recv().is_err() {
        return;
    }
    let _ = seq.run(&mut |value| {
        if values.send(value).is_err() {
            return ControlFlow::Break(());
        }
        match requests.recv() {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        }
    });
}
