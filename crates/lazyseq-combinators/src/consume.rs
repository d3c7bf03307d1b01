//! Terminal operations. Each one runs its input at most once and stops it
//! as early as the answer is known.

use std::ops::ControlFlow;

use lazyseq_core::Sequence;

/// Whether `pred` holds for at least one value. Stops at the first match.
pub fn any<S, P>(seq: &S, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    seq.run(&mut |v| {
        if pred(&v) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .is_break()
}

/// Whether `pred` holds for every value (`true` for an empty sequence).
/// Stops at the first counterexample.
pub fn all<S, P>(seq: &S, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    seq.run(&mut |v| {
        if pred(&v) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    })
    .is_continue()
}

/// The first value `pred` accepts.
pub fn first<S, P>(seq: &S, pred: P) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let mut found = None;
    let _ = seq.run(&mut |v| {
        if pred(&v) {
            found = Some(v);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    found
}

/// Fill `dest` from the front and return how many slots were written.
///
/// The input is stopped once `dest` is full; an empty `dest` never runs it.
///
/// ```
/// use lazyseq_combinators::{collect_into_slice, range_from};
///
/// let mut buf = [0i64; 3];
/// assert_eq!(collect_into_slice(&range_from(5, 5), &mut buf), 3);
/// assert_eq!(buf, [5, 10, 15]);
/// ```
pub fn collect_into_slice<S>(seq: &S, dest: &mut [S::Item]) -> usize
where
    S: Sequence + ?Sized,
{
    if dest.is_empty() {
        return 0;
    }
    let mut slots = dest.iter_mut();
    let mut written = 0;
    let _ = seq.run(&mut |v| {
        let Some(slot) = slots.next() else {
            return ControlFlow::Break(());
        };
        *slot = v;
        written += 1;
        if slots.len() == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    written
}

/// Extend `dest` with every value (maps, sets, strings, ...).
pub fn collect_into<S, C>(seq: &S, dest: &mut C)
where
    S: Sequence + ?Sized,
    C: Extend<S::Item>,
{
    let _ = seq.run(&mut |v| {
        dest.extend(std::iter::once(v));
        ControlFlow::Continue(())
    });
}

/// Number of values one run produces. Never returns for an infinite input.
pub fn count<S: Sequence + ?Sized>(seq: &S) -> usize {
    let mut n = 0usize;
    let _ = seq.run(&mut |_| {
        n += 1;
        ControlFlow::Continue(())
    });
    n
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use lazyseq_core::source;

    use super::*;
    use crate::range::range_from;

    #[test]
    fn any_short_circuits_on_infinite_input() {
        assert!(any(&range_from(0, 1), |v| *v == 1_000));
        assert!(!any(&source::iter(vec![1, 3, 5]), |v| v % 2 == 0));
        assert!(!any(&source::empty::<i32>(), |_| true));
    }

    #[test]
    fn all_checks_every_value() {
        assert!(all(&source::iter(vec![2, 4, 6]), |v| v % 2 == 0));
        assert!(!all(&range_from(0, 1), |v| *v < 10));
        assert!(all(&source::empty::<i32>(), |_| false));
    }

    #[test]
    fn first_finds_match() {
        assert_eq!(first(&range_from(1, 1), |v| v % 7 == 0), Some(7));
        assert_eq!(first(&source::iter(vec![1, 2]), |v| *v > 5), None);
    }

    #[test]
    fn first_over_pairs() {
        let seq = source::iter(vec![("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(first(&seq, |(_, v)| *v >= 2), Some(("b", 2)));
    }

    #[test]
    fn collect_into_slice_short_input() {
        let mut buf = [0; 5];
        assert_eq!(collect_into_slice(&source::iter(vec![1, 2]), &mut buf), 2);
        assert_eq!(buf, [1, 2, 0, 0, 0]);
    }

    #[test]
    fn collect_into_empty_slice_never_runs() {
        let mut buf: [i64; 0] = [];
        assert_eq!(collect_into_slice(&range_from(0, 1), &mut buf), 0);
    }

    #[test]
    fn collect_into_map_and_set() {
        let mut map = BTreeMap::new();
        collect_into(&source::iter(vec![("a", 1), ("b", 2), ("a", 3)]), &mut map);
        assert_eq!(map, BTreeMap::from([("a", 3), ("b", 2)]));

        let mut set = HashSet::new();
        collect_into(&source::iter(vec![1, 1, 2]), &mut set);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn count_values() {
        assert_eq!(count(&source::iter(0..17)), 17);
        assert_eq!(count(&source::empty::<()>()), 0);
    }
}
