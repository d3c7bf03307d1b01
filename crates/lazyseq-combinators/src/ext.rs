//! Method-call syntax for every combinator.

use lazyseq_core::{Cancellable, CancellationToken, SeqError, Sequence};

use crate::chain::ChainWith;
use crate::pair::{Flatten, Keys, Pairwise, Values};
use crate::range::Cycle;
use crate::slice::{DropWhile, Slice, TakeWhile};
use crate::transform::{Accumulate, Enumerate, Filter, Map};
use crate::zip::{Compress, Zip, ZipLongest};

/// Extension trait implemented for every sized [`Sequence`].
///
/// ```
/// use lazyseq_combinators::{range_from, source, SequenceExt};
///
/// let labelled = range_from(1, 1)
///     .zip(source::iter(vec!["one", "two", "three"]))
///     .filter(|(n, _)| n % 2 == 1)
///     .collect_vec();
/// assert_eq!(labelled, [(1, "one"), (3, "three")]);
/// ```
pub trait SequenceExt: Sequence + Sized {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        crate::transform::map(self, f)
    }

    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        crate::transform::filter(self, pred)
    }

    fn enumerate(self) -> Enumerate<Self> {
        crate::transform::enumerate(self)
    }

    fn enumerate_from(self, start: usize) -> Enumerate<Self> {
        crate::transform::enumerate_from(self, start)
    }

    fn accumulate<A, F>(self, f: F, initial: A) -> Accumulate<Self, F, A>
    where
        F: Fn(&A, Self::Item) -> A,
        A: Clone,
    {
        crate::transform::accumulate(self, f, initial)
    }

    /// Run `other` after `self`.
    fn chain_with<B>(self, other: B) -> ChainWith<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        ChainWith::new(self, other)
    }

    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Sequence + Sync,
        B::Item: Send,
    {
        crate::zip::zip(self, other)
    }

    fn zip_longest<B>(self, other: B, fill: Self::Item) -> ZipLongest<Self, B, Self::Item>
    where
        B: Sequence<Item = Self::Item> + Sync,
        Self::Item: Clone + Send,
    {
        crate::zip::zip_longest(fill, self, other)
    }

    fn compress<B>(self, selectors: B) -> Compress<Self, B>
    where
        B: Sequence<Item = bool> + Sync,
    {
        crate::zip::compress(self, selectors)
    }

    fn cycle(self) -> Cycle<Self>
    where
        Self::Item: Clone,
    {
        crate::range::cycle(self)
    }

    /// # Errors
    /// [`SeqError::InvalidArgument`] if `step` is zero.
    fn slice(self, start: usize, end: usize, step: usize) -> Result<Slice<Self>, SeqError> {
        crate::slice::slice(self, start, end, step)
    }

    /// # Errors
    /// [`SeqError::InvalidArgument`] if `step` is zero.
    fn slice_until(self, end: usize, step: usize) -> Result<Slice<Self>, SeqError> {
        crate::slice::slice_until(self, end, step)
    }

    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        crate::slice::drop_while(self, pred)
    }

    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        crate::slice::take_while(self, pred)
    }

    fn keys<K, V>(self) -> Keys<Self>
    where
        Self: Sequence<Item = (K, V)>,
    {
        crate::pair::keys(self)
    }

    fn values<K, V>(self) -> Values<Self>
    where
        Self: Sequence<Item = (K, V)>,
    {
        crate::pair::values(self)
    }

    fn flatten<T>(self) -> Flatten<Self>
    where
        Self: Sequence<Item = (T, T)>,
    {
        crate::pair::flatten(self)
    }

    fn pairwise(self) -> Pairwise<Self>
    where
        Self::Item: Clone,
    {
        crate::pair::pairwise(self)
    }

    /// Stop once `token` is cancelled or its deadline passes.
    fn cancellable(self, token: CancellationToken) -> Cancellable<Self> {
        Cancellable::new(token, self)
    }

    fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        crate::consume::any(self, pred)
    }

    fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        crate::consume::all(self, pred)
    }

    fn first<P>(&self, pred: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        crate::consume::first(self, pred)
    }

    fn count(&self) -> usize {
        crate::consume::count(self)
    }

    fn collect_vec(&self) -> Vec<Self::Item> {
        lazyseq_core::collect_vec(self)
    }

    fn collect_into<C>(&self, dest: &mut C)
    where
        C: Extend<Self::Item>,
    {
        crate::consume::collect_into(self, dest);
    }

    fn collect_into_slice(&self, dest: &mut [Self::Item]) -> usize {
        crate::consume::collect_into_slice(self, dest)
    }
}

impl<S: Sequence> SequenceExt for S {}
