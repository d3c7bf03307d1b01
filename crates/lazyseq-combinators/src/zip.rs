//! Lock-step combinators over several inputs.
//!
//! One input is driven in the usual push style on the calling thread; every
//! other input is opened as a scoped [`PullHandle`] and advanced one value
//! at a time. Handles are released explicitly before `run` returns (so a
//! producer panic surfaces in the caller), and by their `Drop` on unwind.

use std::ops::ControlFlow;
use std::thread;

use lazyseq_core::{Accept, Downstream, PullHandle, Sequence};
use tracing::trace;

fn release_all<T>(handles: &mut [PullHandle<'_, T>]) {
    for handle in handles {
        handle.release();
    }
}

/// Element-wise pairs of two inputs; ends with the shorter one.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

/// ```
/// use lazyseq_combinators::{collect_vec, range_from, source, zip};
///
/// let seq = zip(source::iter(vec!['a', 'b', 'c']), range_from(1, 1));
/// assert_eq!(collect_vec(&seq), [('a', 1), ('b', 2), ('c', 3)]);
/// ```
pub fn zip<A, B>(left: A, right: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence + Sync,
    B::Item: Send,
{
    Zip { left, right }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence + Sync,
    B::Item: Send,
{
    type Item = (A::Item, B::Item);

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        thread::scope(|scope| {
            let mut right = PullHandle::scoped(scope, &self.right);
            let mut down = Downstream::new(accept);
            let _ = self.left.run(&mut |a| match right.advance() {
                Some(b) => down.push((a, b)),
                None => ControlFlow::Break(()),
            });
            right.release();
            down.finish()
        })
    }
}

/// Element-wise pairs padded with `fill`; ends with the longer input.
#[derive(Debug, Clone)]
pub struct ZipLongest<A, B, T> {
    fill: T,
    left: A,
    right: B,
}

pub fn zip_longest<A, B, T>(fill: T, left: A, right: B) -> ZipLongest<A, B, T>
where
    A: Sequence<Item = T>,
    B: Sequence<Item = T> + Sync,
    T: Clone + Send,
{
    ZipLongest { fill, left, right }
}

impl<A, B, T> Sequence for ZipLongest<A, B, T>
where
    A: Sequence<Item = T>,
    B: Sequence<Item = T> + Sync,
    T: Clone + Send,
{
    type Item = (T, T);

    fn run(&self, accept: &mut Accept<'_, (T, T)>) -> ControlFlow<()> {
        thread::scope(|scope| {
            let mut right = PullHandle::scoped(scope, &self.right);
            let mut down = Downstream::new(accept);
            let _ = self.left.run(&mut |a| {
                let b = right.advance().unwrap_or_else(|| self.fill.clone());
                down.push((a, b))
            });
            if !down.is_stopped() {
                // Left side ran dry; drain the right side against the fill.
                while let Some(b) = right.advance() {
                    if down.push((self.fill.clone(), b)).is_break() {
                        break;
                    }
                }
            }
            right.release();
            down.finish()
        })
    }
}

/// Round-robin over same-typed inputs: one value from each in turn.
///
/// Ends as soon as any input is exhausted; values of the round in
/// progress that were already pulled have been yielded by then.
#[derive(Debug, Clone)]
pub struct Interleave<S> {
    inputs: Vec<S>,
}

pub fn interleave<I>(seqs: I) -> Interleave<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence + Sync,
    <I::Item as Sequence>::Item: Send,
{
    Interleave {
        inputs: seqs.into_iter().collect(),
    }
}

impl<S> Sequence for Interleave<S>
where
    S: Sequence + Sync,
    S::Item: Send,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        if self.inputs.is_empty() {
            return ControlFlow::Continue(());
        }
        thread::scope(|scope| {
            let mut handles: Vec<_> = self
                .inputs
                .iter()
                .map(|seq| PullHandle::scoped(scope, seq))
                .collect();
            trace!(inputs = handles.len(), "interleave opened pull handles");
            let flow = 'rounds: loop {
                for handle in &mut handles {
                    let Some(v) = handle.advance() else {
                        break 'rounds ControlFlow::Continue(());
                    };
                    if accept(v).is_break() {
                        break 'rounds ControlFlow::Break(());
                    }
                }
            };
            release_all(&mut handles);
            flow
        })
    }
}

/// Round-robin in full rounds, padding exhausted inputs with `fill`.
///
/// Ends once a round finds every input exhausted.
#[derive(Debug, Clone)]
pub struct InterleaveLongest<S, T> {
    fill: T,
    inputs: Vec<S>,
}

/// ```
/// use lazyseq_combinators::{collect_vec, interleave_longest, source};
///
/// let seq = interleave_longest(
///     0,
///     [source::iter(vec![1, 2]), source::iter(vec![10, 20, 30])],
/// );
/// assert_eq!(collect_vec(&seq), [1, 10, 2, 20, 0, 30]);
/// ```
pub fn interleave_longest<I, T>(fill: T, seqs: I) -> InterleaveLongest<I::Item, T>
where
    I: IntoIterator,
    I::Item: Sequence<Item = T> + Sync,
    T: Clone + Send,
{
    InterleaveLongest {
        fill,
        inputs: seqs.into_iter().collect(),
    }
}

impl<S, T> Sequence for InterleaveLongest<S, T>
where
    S: Sequence<Item = T> + Sync,
    T: Clone + Send,
{
    type Item = T;

    fn run(&self, accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        if self.inputs.is_empty() {
            return ControlFlow::Continue(());
        }
        thread::scope(|scope| {
            let mut handles: Vec<_> = self
                .inputs
                .iter()
                .map(|seq| PullHandle::scoped(scope, seq))
                .collect();
            trace!(inputs = handles.len(), "interleave_longest opened pull handles");
            let flow = 'rounds: loop {
                // Exhausted handles keep answering `None` without pulling.
                let round: Vec<Option<T>> = handles.iter_mut().map(PullHandle::advance).collect();
                if round.iter().all(Option::is_none) {
                    break ControlFlow::Continue(());
                }
                for v in round {
                    if accept(v.unwrap_or_else(|| self.fill.clone())).is_break() {
                        break 'rounds ControlFlow::Break(());
                    }
                }
            };
            release_all(&mut handles);
            flow
        })
    }
}

/// Values of `seq` whose matching selector is `true`.
///
/// Ends with the shorter of the two inputs.
#[derive(Debug, Clone)]
pub struct Compress<S, B> {
    inner: S,
    selectors: B,
}

pub fn compress<S, B>(seq: S, selectors: B) -> Compress<S, B>
where
    S: Sequence,
    B: Sequence<Item = bool> + Sync,
{
    Compress {
        inner: seq,
        selectors,
    }
}

impl<S, B> Sequence for Compress<S, B>
where
    S: Sequence,
    B: Sequence<Item = bool> + Sync,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        thread::scope(|scope| {
            let mut selectors = PullHandle::scoped(scope, &self.selectors);
            let mut down = Downstream::new(accept);
            let _ = self.inner.run(&mut |v| match selectors.advance() {
                Some(true) => down.push(v),
                Some(false) => ControlFlow::Continue(()),
                None => ControlFlow::Break(()),
            });
            selectors.release();
            down.finish()
        })
    }
}
