//! Cancellable sequence bridge.
//!
//! [`Cancellable`] mirrors an inner sequence until the inner sequence runs
//! dry or a [`CancellationToken`] fires, whichever happens first.
//!
//! Each run owns one [`PullHandle`] over the inner sequence, kept behind a
//! mutex. Every value is fetched by a short-lived scoped worker that locks
//! the mutex, performs exactly one `advance()`, and posts the result on a
//! capacity-1 channel. The consuming thread races that channel against the
//! token with `select!`. Releasing the handle takes the same mutex, so a
//! release can never overlap a pull that is still in flight, and the
//! enclosing thread scope joins every worker before `run` returns.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};

use crossbeam_channel::{select, Receiver};
use parking_lot::Mutex;
use tracing::debug;

use crate::cancel::CancellationToken;
use crate::observer::{BridgeEvent, BridgeObserver};
use crate::observers::NoOpObserver;
use crate::pull::PullHandle;
use crate::sequence::{Accept, Sequence};

type SharedHandle<'scope, T> = Arc<Mutex<PullHandle<'scope, T>>>;

/// A sequence that stops early when its token is cancelled.
///
/// Cancellation is not an error: the run simply ends, exactly as if the
/// inner sequence had been exhausted at that point, and `run` returns
/// `Continue`.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use lazyseq_core::{cancellable, source, CancellationToken, Sequence};
///
/// let token = CancellationToken::new();
/// let seq = cancellable(token.clone(), source::iter(0..));
///
/// let mut seen = Vec::new();
/// let _ = seq.run(&mut |v| {
///     seen.push(v);
///     if v == 2 {
///         token.cancel();
///     }
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, [0, 1, 2]);
/// ```
pub struct Cancellable<S> {
    inner: S,
    token: CancellationToken,
    observer: Arc<dyn BridgeObserver>,
}

/// Wrap `seq` so that consumption stops once `token` is cancelled.
pub fn cancellable<S: Sequence>(token: CancellationToken, seq: S) -> Cancellable<S> {
    Cancellable::new(token, seq)
}

impl<S> Cancellable<S> {
    #[must_use]
    pub fn new(token: CancellationToken, inner: S) -> Self {
        Self {
            inner,
            token,
            observer: Arc::new(NoOpObserver::new()),
        }
    }

    /// Report run transitions to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn BridgeObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The token this bridge watches.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Outcome of racing one pull against the token.
enum Race<T> {
    Pulled(Option<T>),
    Cancelled,
    WorkerLost,
}

/// Releases the shared handle on every exit path, panics included.
struct ReleaseGuard<'scope, 'o, T> {
    handle: SharedHandle<'scope, T>,
    observer: &'o dyn BridgeObserver,
}

impl<T> Drop for ReleaseGuard<'_, '_, T> {
    fn drop(&mut self) {
        // Blocks until an in-flight pull (if any) has returned.
        self.handle.lock().release_quietly();
        self.observer.on_event(BridgeEvent::Released);
    }
}

impl<S> Sequence for Cancellable<S>
where
    S: Sequence + Sync,
    S::Item: Send,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let observer = self.observer.as_ref();
        thread::scope(|scope| {
            let handle: SharedHandle<'_, S::Item> =
                Arc::new(Mutex::new(PullHandle::scoped(scope, &self.inner)));
            // The worker of the most recent pull. One that lost the race is
            // joined here so a producer panic keeps its own payload.
            let mut in_flight: Option<ScopedJoinHandle<'_, ()>> = None;

            let flow = {
                let _guard = ReleaseGuard {
                    handle: Arc::clone(&handle),
                    observer,
                };
                observer.on_event(BridgeEvent::Started);
                let deadline = self.token.deadline_channel();

                loop {
                    if self.token.is_cancelled() {
                        observer.on_event(BridgeEvent::Cancelled);
                        break ControlFlow::Continue(());
                    }

                    let (tx, rx) = crossbeam_channel::bounded(1);
                    let pull = Arc::clone(&handle);
                    observer.on_event(BridgeEvent::PullDispatched);
                    in_flight = Some(scope.spawn(move || {
                        let pulled = pull.lock().advance();
                        // Capacity 1 and a single send: never blocks, even
                        // if nobody is listening any more.
                        let _ = tx.send(pulled);
                    }));

                    let race = select! {
                        recv(rx) -> msg => match msg {
                            Ok(pulled) => Race::Pulled(pulled),
                            Err(_) => Race::WorkerLost,
                        },
                        recv(self.token.done()) -> _ => settle(&rx),
                        recv(deadline) -> _ => settle(&rx),
                    };

                    match race {
                        Race::Pulled(Some(value)) => {
                            observer.on_event(BridgeEvent::Delivered);
                            if accept(value).is_break() {
                                observer.on_event(BridgeEvent::ConsumerStopped);
                                break ControlFlow::Break(());
                            }
                        }
                        Race::Pulled(None) => {
                            observer.on_event(BridgeEvent::Exhausted);
                            break ControlFlow::Continue(());
                        }
                        Race::Cancelled => {
                            observer.on_event(BridgeEvent::Cancelled);
                            break ControlFlow::Continue(());
                        }
                        Race::WorkerLost => {
                            debug!("pull worker exited without a result");
                            break ControlFlow::Continue(());
                        }
                    }
                }
            };

            // The guard has released the handle, so the last worker is done.
            if let Some(worker) = in_flight.take() {
                if let Err(payload) = worker.join() {
                    std::panic::resume_unwind(payload);
                }
            }
            flow
        })
    }
}

/// Tie-break once the token has fired: a value that is already fully
/// pulled is still delivered.
fn settle<T>(rx: &Receiver<Option<T>>) -> Race<T> {
    match rx.try_recv() {
        Ok(pulled) => Race::Pulled(pulled),
        Err(_) => Race::Cancelled,
    }
}
