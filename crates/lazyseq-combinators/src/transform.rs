//! Per-value transformations: map, filter, enumerate, accumulate.

use std::ops::ControlFlow;

use lazyseq_core::{Accept, Sequence};

/// Applies a function to every value.
#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

pub fn map<S, F, U>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Map { inner: seq, f }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn run(&self, accept: &mut Accept<'_, U>) -> ControlFlow<()> {
        self.inner.run(&mut |v| accept((self.f)(v)))
    }
}

/// Keeps the values a predicate accepts.
#[derive(Clone)]
pub struct Filter<S, P> {
    inner: S,
    pred: P,
}

pub fn filter<S, P>(seq: S, pred: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter { inner: seq, pred }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        self.inner.run(&mut |v| {
            if (self.pred)(&v) {
                accept(v)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

/// Pairs each value with a running index.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    inner: S,
    start: usize,
}

/// Index values from zero.
pub fn enumerate<S: Sequence>(seq: S) -> Enumerate<S> {
    enumerate_from(seq, 0)
}

/// Index values from `start`.
pub fn enumerate_from<S: Sequence>(seq: S, start: usize) -> Enumerate<S> {
    Enumerate { inner: seq, start }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let mut index = self.start;
        self.inner.run(&mut |v| {
            let current = index;
            index = index.wrapping_add(1);
            accept((current, v))
        })
    }
}

/// Running fold: yields the accumulator after each value.
///
/// The accumulator starts again from `initial` on every run.
#[derive(Clone)]
pub struct Accumulate<S, F, A> {
    inner: S,
    f: F,
    initial: A,
}

/// ```
/// use lazyseq_combinators::{accumulate, collect_vec, source};
///
/// let sums = accumulate(source::iter(1..=4), |acc, v| acc + v, 0);
/// assert_eq!(collect_vec(&sums), [1, 3, 6, 10]);
/// ```
pub fn accumulate<S, F, A>(seq: S, f: F, initial: A) -> Accumulate<S, F, A>
where
    S: Sequence,
    F: Fn(&A, S::Item) -> A,
    A: Clone,
{
    Accumulate {
        inner: seq,
        f,
        initial,
    }
}

impl<S, F, A> Sequence for Accumulate<S, F, A>
where
    S: Sequence,
    F: Fn(&A, S::Item) -> A,
    A: Clone,
{
    type Item = A;

    fn run(&self, accept: &mut Accept<'_, A>) -> ControlFlow<()> {
        let mut acc = self.initial.clone();
        self.inner.run(&mut |v| {
            acc = (self.f)(&acc, v);
            accept(acc.clone())
        })
    }
}
