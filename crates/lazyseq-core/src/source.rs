//! Adapters that turn ordinary Rust values into sequences.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::sequence::{Accept, Sequence};

/// Sequence over a cloneable `IntoIterator` (a `Vec`, a map, a `Range`...).
///
/// Each run clones the collection and walks the clone, so the sequence can
/// be replayed any number of times.
#[derive(Debug, Clone)]
pub struct Iter<I> {
    items: I,
}

/// Build a sequence from a cloneable collection or iterator.
pub fn iter<I>(items: I) -> Iter<I>
where
    I: IntoIterator + Clone,
{
    Iter { items }
}

impl<I> Sequence for Iter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        for item in self.items.clone() {
            accept(item)?;
        }
        ControlFlow::Continue(())
    }
}

/// Sequence defined by a closure that drives `accept` itself.
pub struct FromFn<F, T> {
    produce: F,
    _item: PhantomData<fn() -> T>,
}

/// Build a sequence from a producer closure.
///
/// The closure must honour the protocol: stop calling `accept` as soon as
/// it returns `Break`, and propagate that `Break`.
///
/// ```
/// use std::ops::ControlFlow;
/// use lazyseq_core::{sequence::collect_vec, source};
///
/// let squares = source::from_fn(|accept| {
///     for i in 0..4u32 {
///         accept(i * i)?;
///     }
///     ControlFlow::Continue(())
/// });
/// assert_eq!(collect_vec(&squares), [0, 1, 4, 9]);
/// ```
pub fn from_fn<T, F>(produce: F) -> FromFn<F, T>
where
    F: Fn(&mut Accept<'_, T>) -> ControlFlow<()>,
{
    FromFn {
        produce,
        _item: PhantomData,
    }
}

impl<F, T> Sequence for FromFn<F, T>
where
    F: Fn(&mut Accept<'_, T>) -> ControlFlow<()>,
{
    type Item = T;

    fn run(&self, accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        (self.produce)(accept)
    }
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            produce: self.produce.clone(),
            _item: PhantomData,
        }
    }
}

/// A sequence that produces nothing.
pub struct Empty<T>(PhantomData<fn() -> T>);

#[must_use]
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn run(&self, _accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// A sequence that produces a single clone of `value`.
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: T,
}

pub fn once<T: Clone>(value: T) -> Once<T> {
    Once { value }
}

impl<T: Clone> Sequence for Once<T> {
    type Item = T;

    fn run(&self, accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        accept(self.value.clone())
    }
}
