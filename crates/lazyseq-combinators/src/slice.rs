//! Positional and predicate-based truncation.
//!
//! These combinators end production on their own, so they keep the
//! consumer's answers apart from their own stop with a
//! [`Downstream`]: truncation is reported as `Continue`, a consumer stop
//! as `Break`.

use std::ops::ControlFlow;

use lazyseq_core::{Accept, Downstream, SeqError, Sequence};

/// Every `step`-th value at positions `start..end` of the input.
#[derive(Debug, Clone)]
pub struct Slice<S> {
    inner: S,
    start: usize,
    end: usize,
    step: usize,
}

/// Yield the values at positions `start, start + step, ...` that are
/// below `end`.
///
/// The first `start` values are consumed and discarded even when
/// `start >= end`. The input stops being pulled as soon as position
/// `max(start, end)` is reached, so infinite inputs are fine.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `step` is zero.
///
/// ```
/// use lazyseq_combinators::{collect_vec, range_from, slice};
///
/// let seq = slice(range_from(0, 1), 2, 9, 3).unwrap();
/// assert_eq!(collect_vec(&seq), [2, 5, 8]);
/// ```
pub fn slice<S: Sequence>(
    seq: S,
    start: usize,
    end: usize,
    step: usize,
) -> Result<Slice<S>, SeqError> {
    if step == 0 {
        return Err(SeqError::invalid("slice step must be a positive integer"));
    }
    Ok(Slice {
        inner: seq,
        start,
        end,
        step,
    })
}

/// Equivalent to `slice(seq, 0, end, step)`.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `step` is zero.
pub fn slice_until<S: Sequence>(seq: S, end: usize, step: usize) -> Result<Slice<S>, SeqError> {
    slice(seq, 0, end, step)
}

impl<S: Sequence> Sequence for Slice<S> {
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let limit = self.start.max(self.end);
        if limit == 0 {
            return ControlFlow::Continue(());
        }
        let mut down = Downstream::new(accept);
        let mut position = 0usize;
        let _ = self.inner.run(&mut |v| {
            let i = position;
            position += 1;
            if i >= self.start && i < self.end && (i - self.start) % self.step == 0 {
                down.push(v)?;
            }
            if position >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        down.finish()
    }
}

/// Skips values while a predicate holds, then passes everything through.
#[derive(Clone)]
pub struct DropWhile<S, P> {
    inner: S,
    pred: P,
}

pub fn drop_while<S, P>(seq: S, pred: P) -> DropWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    DropWhile { inner: seq, pred }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let mut dropping = true;
        self.inner.run(&mut |v| {
            if dropping && (self.pred)(&v) {
                return ControlFlow::Continue(());
            }
            dropping = false;
            accept(v)
        })
    }
}

/// Passes values through while a predicate holds, then stops.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    inner: S,
    pred: P,
}

pub fn take_while<S, P>(seq: S, pred: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    TakeWhile { inner: seq, pred }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let mut down = Downstream::new(accept);
        let _ = self.inner.run(&mut |v| {
            if !(self.pred)(&v) {
                return ControlFlow::Break(());
            }
            down.push(v)
        });
        down.finish()
    }
}
