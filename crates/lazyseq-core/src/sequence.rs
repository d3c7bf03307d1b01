//! The push-style sequence protocol every combinator builds on.
//!
//! A [`Sequence`] hands each value to an `accept` callback. The callback
//! answers with [`ControlFlow::Break`] once it wants no more values, after
//! which the producer must not call it again and must clean up before
//! returning from [`Sequence::run`].

use std::ops::ControlFlow;
use std::rc::Rc;
use std::sync::Arc;

/// Callback type a consumer hands to [`Sequence::run`].
pub type Accept<'a, T> = dyn FnMut(T) -> ControlFlow<()> + 'a;

/// A lazy, restartable producer of values.
///
/// Every call to [`run`](Sequence::run) starts over from the beginning.
/// The return value tells the caller why production ended:
/// `Break(())` if `accept` asked to stop, `Continue(())` if the producer
/// ran out of values (or was truncated or cancelled) on its own.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use lazyseq_core::{source, Sequence};
///
/// let seq = source::iter(1..=5);
/// let mut seen = Vec::new();
/// let flow = seq.run(&mut |v| {
///     seen.push(v);
///     if v == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// });
/// assert!(flow.is_break());
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub trait Sequence {
    /// Type of the produced values.
    type Item;

    /// Feed every value to `accept`, in order, until it breaks or the
    /// source is exhausted.
    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()>;
}

/// A sequence of key/value (or index/value) pairs.
///
/// Pairs are plain tuple items, so every combinator works on paired
/// sequences unchanged. This trait only names the shape.
pub trait PairedSequence<K, V>: Sequence<Item = (K, V)> {}

impl<K, V, S> PairedSequence<K, V> for S where S: Sequence<Item = (K, V)> + ?Sized {}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        (**self).run(accept)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        (**self).run(accept)
    }
}

impl<S: Sequence + ?Sized> Sequence for Arc<S> {
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        (**self).run(accept)
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        (**self).run(accept)
    }
}

/// Consumer wrapper that remembers whether the consumer asked to stop.
///
/// Combinators that end production on their own (slicing, take-while)
/// break out of their input's `run` for two different reasons; this keeps
/// the two apart so the combinator can report `Continue` for truncation and
/// `Break` for a consumer stop.
pub struct Downstream<'a, 'b, T> {
    accept: &'a mut Accept<'b, T>,
    stopped: bool,
}

impl<'a, 'b, T> Downstream<'a, 'b, T> {
    #[must_use]
    pub fn new(accept: &'a mut Accept<'b, T>) -> Self {
        Self {
            accept,
            stopped: false,
        }
    }

    /// Forward one value to the consumer.
    pub fn push(&mut self, item: T) -> ControlFlow<()> {
        let flow = (self.accept)(item);
        if flow.is_break() {
            self.stopped = true;
        }
        flow
    }

    /// Whether the consumer has asked to stop.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The flow to return from the enclosing `run`.
    #[must_use]
    pub fn finish(&self) -> ControlFlow<()> {
        if self.stopped {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Drain a sequence into a `Vec`.
pub fn collect_vec<S: Sequence + ?Sized>(seq: &S) -> Vec<S::Item> {
    let mut out = Vec::new();
    let _ = seq.run(&mut |v| {
        out.push(v);
        ControlFlow::Continue(())
    });
    out
}
