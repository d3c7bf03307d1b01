//! Combinators specific to paired (key/value) sequences, plus `pairwise`
//! which builds one.

use std::ops::ControlFlow;

use lazyseq_core::{Accept, Sequence};

/// First element of every pair.
#[derive(Debug, Clone)]
pub struct Keys<S> {
    inner: S,
}

pub fn keys<S, K, V>(seq: S) -> Keys<S>
where
    S: Sequence<Item = (K, V)>,
{
    Keys { inner: seq }
}

impl<S, K, V> Sequence for Keys<S>
where
    S: Sequence<Item = (K, V)>,
{
    type Item = K;

    fn run(&self, accept: &mut Accept<'_, K>) -> ControlFlow<()> {
        self.inner.run(&mut |(k, _)| accept(k))
    }
}

/// Second element of every pair.
#[derive(Debug, Clone)]
pub struct Values<S> {
    inner: S,
}

pub fn values<S, K, V>(seq: S) -> Values<S>
where
    S: Sequence<Item = (K, V)>,
{
    Values { inner: seq }
}

impl<S, K, V> Sequence for Values<S>
where
    S: Sequence<Item = (K, V)>,
{
    type Item = V;

    fn run(&self, accept: &mut Accept<'_, V>) -> ControlFlow<()> {
        self.inner.run(&mut |(_, v)| accept(v))
    }
}

/// Unpacks `(k, v)` pairs of one type into `k1, v1, k2, v2, ...`.
#[derive(Debug, Clone)]
pub struct Flatten<S> {
    inner: S,
}

/// ```
/// use std::collections::BTreeMap;
/// use lazyseq_combinators::{collect_vec, flatten, source};
///
/// let map = BTreeMap::from([(1, 10), (2, 20)]);
/// assert_eq!(collect_vec(&flatten(source::iter(map))), [1, 10, 2, 20]);
/// ```
pub fn flatten<S, T>(seq: S) -> Flatten<S>
where
    S: Sequence<Item = (T, T)>,
{
    Flatten { inner: seq }
}

impl<S, T> Sequence for Flatten<S>
where
    S: Sequence<Item = (T, T)>,
{
    type Item = T;

    fn run(&self, accept: &mut Accept<'_, T>) -> ControlFlow<()> {
        self.inner.run(&mut |(k, v)| {
            accept(k)?;
            accept(v)
        })
    }
}

/// Overlapping consecutive pairs: `(a, b), (b, c), ...`.
///
/// Fewer than two input values give an empty sequence.
#[derive(Debug, Clone)]
pub struct Pairwise<S> {
    inner: S,
}

pub fn pairwise<S>(seq: S) -> Pairwise<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Pairwise { inner: seq }
}

impl<S> Sequence for Pairwise<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = (S::Item, S::Item);

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        let mut previous: Option<S::Item> = None;
        self.inner.run(&mut |v: S::Item| match previous.replace(v.clone()) {
            Some(prev) => accept((prev, v)),
            None => ControlFlow::Continue(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use lazyseq_core::{collect_vec, source};

    use super::*;

    fn sample() -> source::Iter<BTreeMap<&'static str, i32>> {
        source::iter(BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]))
    }

    #[test]
    fn keys_and_values() {
        assert_eq!(collect_vec(&keys(sample())), ["a", "b", "c"]);
        assert_eq!(collect_vec(&values(sample())), [1, 2, 3]);
    }

    #[test]
    fn flatten_interleaves_keys_and_values() {
        let seq = flatten(source::iter(vec![(1, 2), (3, 4)]));
        assert_eq!(collect_vec(&seq), [1, 2, 3, 4]);
    }

    #[test]
    fn flatten_stop_between_key_and_value() {
        let seq = flatten(source::iter(vec![("k1", "v1"), ("k2", "v2")]));
        let mut seen = Vec::new();
        let flow = seq.run(&mut |v| {
            seen.push(v);
            if v == "k2" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, ["k1", "v1", "k2"]);
    }

    #[test]
    fn pairwise_overlaps() {
        let seq = pairwise(source::iter(vec![1, 2, 3, 4]));
        assert_eq!(collect_vec(&seq), [(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn pairwise_needs_two_values() {
        assert!(collect_vec(&pairwise(source::iter(vec![1]))).is_empty());
        assert!(collect_vec(&pairwise(source::empty::<i32>())).is_empty());
    }
}
