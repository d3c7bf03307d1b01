//! Lifecycle hooks for the cancellable bridge.
//!
//! The bridge reports every state transition of a run to a
//! [`BridgeObserver`]. Observers must be cheap and must not block: they are
//! called on the consuming thread between pulls.

use std::sync::Arc;

use parking_lot::RwLock;

/// A state transition of one bridge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeEvent {
    /// A run began and opened its pull handle.
    Started,
    /// A worker was dispatched to pull the next value.
    PullDispatched,
    /// A pulled value was handed to the consumer.
    Delivered,
    /// The consumer asked to stop.
    ConsumerStopped,
    /// The inner sequence ran out of values.
    Exhausted,
    /// The cancellation signal won the race (or was already set).
    Cancelled,
    /// The pull handle was released. Happens exactly once per run.
    Released,
}

impl BridgeEvent {
    /// Whether this event ends a run (before the final `Released`).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BridgeEvent::ConsumerStopped | BridgeEvent::Exhausted | BridgeEvent::Cancelled
        )
    }
}

/// Observer trait for receiving bridge events.
pub trait BridgeObserver: Send + Sync {
    /// Receive one event.
    fn on_event(&self, event: BridgeEvent);
}

impl<O: BridgeObserver + ?Sized> BridgeObserver for Arc<O> {
    fn on_event(&self, event: BridgeEvent) {
        (**self).on_event(event);
    }
}

/// Fan-out observer that forwards each event to every registered observer.
pub struct ObserverSet {
    observers: RwLock<Vec<Arc<dyn BridgeObserver>>>,
}

impl ObserverSet {
    /// Create a set with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn BridgeObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ObserverSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeObserver for ObserverSet {
    fn on_event(&self, event: BridgeEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }
}
