//! Concrete bridge observers.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, trace};

use crate::observer::{BridgeEvent, BridgeObserver};

/// Observer that sends events through a channel (non-blocking).
///
/// Events are dropped when the channel is full or disconnected.
pub struct ChannelObserver {
    sender: Sender<BridgeEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<BridgeEvent>) -> Self {
        Self { sender }
    }
}

impl BridgeObserver for ChannelObserver {
    fn on_event(&self, event: BridgeEvent) {
        let _ = self.sender.try_send(event);
    }
}

/// Observer that logs events through `tracing`.
///
/// Per-value events go to `trace`, run outcomes to `debug`.
pub struct LoggingObserver {
    label: &'static str,
}

impl LoggingObserver {
    /// Create a logging observer; `label` tags every record.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl BridgeObserver for LoggingObserver {
    fn on_event(&self, event: BridgeEvent) {
        if event.is_terminal() || event == BridgeEvent::Released {
            debug!(bridge = self.label, ?event, "bridge run transition");
        } else {
            trace!(bridge = self.label, ?event, "bridge event");
        }
    }
}

/// Observer that counts events by kind.
#[derive(Default)]
pub struct CountingObserver {
    started: AtomicUsize,
    pulls: AtomicUsize,
    delivered: AtomicUsize,
    stopped: AtomicUsize,
    exhausted: AtomicUsize,
    cancelled: AtomicUsize,
    released: AtomicUsize,
}

/// Snapshot of a [`CountingObserver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub started: usize,
    pub pulls: usize,
    pub delivered: usize,
    pub stopped: usize,
    pub exhausted: usize,
    pub cancelled: usize,
    pub released: usize,
}

impl CountingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read all counters.
    #[must_use]
    pub fn counts(&self) -> EventCounts {
        EventCounts {
            started: self.started.load(Ordering::Acquire),
            pulls: self.pulls.load(Ordering::Acquire),
            delivered: self.delivered.load(Ordering::Acquire),
            stopped: self.stopped.load(Ordering::Acquire),
            exhausted: self.exhausted.load(Ordering::Acquire),
            cancelled: self.cancelled.load(Ordering::Acquire),
            released: self.released.load(Ordering::Acquire),
        }
    }
}

impl BridgeObserver for CountingObserver {
    fn on_event(&self, event: BridgeEvent) {
        let counter = match event {
            BridgeEvent::Started => &self.started,
            BridgeEvent::PullDispatched => &self.pulls,
            BridgeEvent::Delivered => &self.delivered,
            BridgeEvent::ConsumerStopped => &self.stopped,
            BridgeEvent::Exhausted => &self.exhausted,
            BridgeEvent::Cancelled => &self.cancelled,
            BridgeEvent::Released => &self.released,
        };
        counter.fetch_add(1, Ordering::AcqRel);
    }
}

/// Null object pattern: discards every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeObserver for NoOpObserver {
    fn on_event(&self, _event: BridgeEvent) {}
}
