//! Arithmetic progressions, repetition and cycling.

use std::ops::ControlFlow;

use lazyseq_core::{Accept, SeqError, Sequence};

/// Finite arithmetic progression over `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    step: i64,
    len: u64,
}

/// Values `start, start + step, ...` strictly before `end`, in the
/// direction of `step`.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `step` is zero.
///
/// ```
/// use lazyseq_combinators::{collect_vec, range};
///
/// assert_eq!(collect_vec(&range(0, 10, 3).unwrap()), [0, 3, 6, 9]);
/// assert_eq!(collect_vec(&range(4, -1, -1).unwrap()), [4, 3, 2, 1, 0]);
/// assert!(range(0, 5, 0).is_err());
/// ```
pub fn range(start: i64, end: i64, step: i64) -> Result<Range, SeqError> {
    if step == 0 {
        return Err(SeqError::invalid("range step must be non-zero"));
    }
    Ok(Range {
        start,
        step,
        len: range_len(start, end, step),
    })
}

/// Equivalent to `range(0, end, step)`.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `step` is zero.
pub fn range_until(end: i64, step: i64) -> Result<Range, SeqError> {
    range(0, end, step)
}

/// Number of values a range yields. Done in `i128` so that no pair of
/// `i64` bounds can overflow.
pub(crate) fn range_len(start: i64, end: i64, step: i64) -> u64 {
    let (start, end, step) = (i128::from(start), i128::from(end), i128::from(step));
    let len = if step > 0 && start < end {
        1 + (end - start - 1) / step
    } else if step < 0 && start > end {
        1 + (start - end - 1) / -step
    } else {
        0
    };
    // At most 2^64 - 1.
    u64::try_from(len).unwrap_or(u64::MAX)
}

impl Range {
    /// Number of values one run yields.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Sequence for Range {
    type Item = i64;

    fn run(&self, accept: &mut Accept<'_, i64>) -> ControlFlow<()> {
        let mut x = self.start;
        for _ in 0..self.len {
            accept(x)?;
            // Only the step past the final value can wrap, and it is unused.
            x = x.wrapping_add(self.step);
        }
        ControlFlow::Continue(())
    }
}

/// Unbounded arithmetic progression; wraps around on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFrom {
    start: i64,
    step: i64,
}

/// Values `start, start + step, ...` forever.
#[must_use]
pub fn range_from(start: i64, step: i64) -> RangeFrom {
    RangeFrom { start, step }
}

impl Sequence for RangeFrom {
    type Item = i64;

    fn run(&self, accept: &mut Accept<'_, i64>) -> ControlFlow<()> {
        let mut x = self.start;
        loop {
            accept(x)?;
            x = x.wrapping_add(self.step);
        }
    }
}

/// The same value, forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn run(&self, accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        loop {
            accept(self.value.clone())?;
        }
    }
}

/// The same value, a fixed number of times.
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    value: T,
    times: usize,
}

pub fn repeat_n<T: Clone>(value: T, times: usize) -> RepeatN<T> {
    RepeatN { value, times }
}

impl<T: Clone> Sequence for RepeatN<T> {
    type Item = T;

    fn run(&self, accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        for _ in 0..self.times {
            accept(self.value.clone())?;
        }
        ControlFlow::Continue(())
    }
}

/// Replays its input forever.
///
/// The first pass is forwarded live while a copy of each value is saved;
/// later passes replay the copy. An empty input gives an empty sequence.
#[derive(Debug, Clone)]
pub struct Cycle<S> {
    inner: S,
}

/// ```
/// use std::ops::ControlFlow;
/// use lazyseq_combinators::{cycle, source, Sequence};
///
/// let seq = cycle(source::iter(vec!['a', 'b']));
/// let mut seen = String::new();
/// let _ = seq.run(&mut |c| {
///     seen.push(c);
///     if seen.len() == 5 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// });
/// assert_eq!(seen, "ababa");
/// ```
pub fn cycle<S>(seq: S) -> Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Cycle { inner: seq }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let mut saved = Vec::new();
        self.inner.run(&mut |v: S::Item| {
            saved.push(v.clone());
            accept(v)
        })?;
        if saved.is_empty() {
            return ControlFlow::Continue(());
        }
        loop {
            for v in &saved {
                accept(v.clone())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lazyseq_core::{collect_vec, source};

    use super::*;

    fn take<S: Sequence>(seq: &S, n: usize) -> Vec<S::Item> {
        let mut out = Vec::with_capacity(n);
        if n == 0 {
            return out;
        }
        let _ = seq.run(&mut |v| {
            out.push(v);
            if out.len() == n {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        out
    }

    #[test]
    fn range_basic_cases() {
        assert!(matches!(range(0, 10, 0), Err(SeqError::InvalidArgument(_))));
        assert!(collect_vec(&range(0, 0, 1).unwrap()).is_empty());
        assert_eq!(collect_vec(&range(4, -1, -1).unwrap()), [4, 3, 2, 1, 0]);
        assert_eq!(collect_vec(&range(0, 5, 1).unwrap()), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn range_direction_mismatch_is_empty() {
        assert!(range(0, 10, -1).unwrap().is_empty());
        assert!(range(10, 0, 2).unwrap().is_empty());
    }

    #[test]
    fn range_uneven_steps() {
        assert_eq!(collect_vec(&range(1, 10, 4).unwrap()), [1, 5, 9]);
        assert_eq!(collect_vec(&range(10, 1, -4).unwrap()), [10, 6, 2]);
        assert_eq!(range(0, 11, 5).unwrap().len(), 3);
    }

    #[test]
    fn range_extreme_bounds_do_not_overflow() {
        assert_eq!(range_len(i64::MIN, i64::MAX, 1), u64::MAX);
        assert_eq!(range_len(i64::MAX, i64::MIN, -1), u64::MAX);
        assert_eq!(range_len(i64::MIN, i64::MAX, i64::MAX), 3);
        let tail = range(i64::MAX - 2, i64::MAX, 1).unwrap();
        assert_eq!(collect_vec(&tail), [i64::MAX - 2, i64::MAX - 1]);
        let top = range(i64::MAX - 1, i64::MAX, i64::MAX).unwrap();
        assert_eq!(collect_vec(&top), [i64::MAX - 1]);
    }

    #[test]
    fn range_until_starts_at_zero() {
        assert_eq!(collect_vec(&range_until(3, 1).unwrap()), [0, 1, 2]);
        assert!(range_until(3, 0).is_err());
    }

    #[test]
    fn range_from_is_unbounded() {
        assert_eq!(take(&range_from(10, 2), 5), [10, 12, 14, 16, 18]);
        assert_eq!(take(&range_from(0, -3), 3), [0, -3, -6]);
    }

    #[test]
    fn range_from_wraps() {
        assert_eq!(take(&range_from(i64::MAX, 1), 2), [i64::MAX, i64::MIN]);
    }

    #[test]
    fn repeat_forever_and_bounded() {
        assert_eq!(take(&repeat("x"), 3), ["x", "x", "x"]);
        assert_eq!(collect_vec(&repeat_n(7, 4)), [7, 7, 7, 7]);
        assert!(collect_vec(&repeat_n(7, 0)).is_empty());
    }

    #[test]
    fn cycle_repeats_three_times() {
        let seq = cycle(source::iter(vec!['A', 'B', 'C', 'D']));
        let got: String = take(&seq, 12).into_iter().collect();
        assert_eq!(got, "ABCDABCDABCD");
    }

    #[test]
    fn cycle_of_empty_is_empty() {
        let seq = cycle(source::empty::<u8>());
        let flow = seq.run(&mut |_| ControlFlow::Continue(()));
        assert!(flow.is_continue());
    }

    #[test]
    fn cycle_stop_during_first_pass() {
        let seq = cycle(source::iter(0..100));
        assert_eq!(take(&seq, 3), [0, 1, 2]);
    }

    #[test]
    fn cycle_of_pairs() {
        let seq = cycle(source::iter(vec![(1, 'a'), (2, 'b')]));
        assert_eq!(take(&seq, 3), [(1, 'a'), (2, 'b'), (1, 'a')]);
    }
}
