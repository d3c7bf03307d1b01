//! Concatenation of sequences.

use std::ops::ControlFlow;

use lazyseq_core::source::{self, Iter};
use lazyseq_core::{Accept, Sequence};

/// Sequences run back to back, in order.
#[derive(Debug, Clone)]
pub struct Chain<S> {
    parts: Vec<S>,
}

/// Concatenate same-typed sequences.
///
/// ```
/// use lazyseq_combinators::{chain, collect_vec, source};
///
/// let seq = chain([source::iter(vec![1, 2]), source::iter(vec![3])]);
/// assert_eq!(collect_vec(&seq), [1, 2, 3]);
/// ```
pub fn chain<I>(seqs: I) -> Chain<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    Chain {
        parts: seqs.into_iter().collect(),
    }
}

/// Concatenate borrowed slices without copying them.
pub fn chain_slices<'a, T: 'a>(slices: impl IntoIterator<Item = &'a [T]>) -> Chain<Iter<&'a [T]>> {
    chain(slices.into_iter().map(source::iter))
}

/// Concatenate the entries of borrowed maps (`BTreeMap`, `HashMap`, ...),
/// yielding `(&K, &V)` pairs map by map.
pub fn chain_maps<'a, M: 'a>(maps: impl IntoIterator<Item = &'a M>) -> Chain<Iter<&'a M>>
where
    &'a M: IntoIterator,
{
    chain(maps.into_iter().map(source::iter))
}

impl<S: Sequence> Sequence for Chain<S> {
    type Item = S::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        for part in &self.parts {
            part.run(accept)?;
        }
        ControlFlow::Continue(())
    }
}

/// Two sequences of possibly different types, run back to back.
#[derive(Debug, Clone)]
pub struct ChainWith<A, B> {
    first: A,
    second: B,
}

impl<A, B> ChainWith<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for ChainWith<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn run(&self, accept: &mut Accept<'_, Self::Item>) -> ControlFlow<()> {
        self.first.run(accept)?;
        self.second.run(accept)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use lazyseq_core::collect_vec;

    use super::*;
    use crate::ext::SequenceExt;

    #[test]
    fn chain_concatenates_in_argument_order() {
        let seq = chain(vec![
            source::iter(vec![1, 2, 3]),
            source::iter(vec![]),
            source::iter(vec![4, 5]),
        ]);
        assert_eq!(collect_vec(&seq), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn chain_of_nothing_is_empty() {
        let seq = chain(Vec::<source::Iter<Vec<u8>>>::new());
        assert!(collect_vec(&seq).is_empty());
    }

    #[test]
    fn chain_stops_inside_a_later_part() {
        let seq = chain([source::iter(0..3), source::iter(10..13)]);
        let mut seen = Vec::new();
        let flow = seq.run(&mut |v| {
            seen.push(v);
            if v == 11 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, [0, 1, 2, 10, 11]);
    }

    #[test]
    fn chain_slices_borrows() {
        let a = [1, 2];
        let b = [3, 4, 5];
        let seq = chain_slices([&a[..], &b[..]]);
        assert_eq!(collect_vec(&seq.map(|v| *v)), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn chain_maps_yields_entries_map_by_map() {
        let a = BTreeMap::from([("a", 1), ("b", 2)]);
        let b = BTreeMap::from([("c", 3)]);
        let seq = chain_maps([&a, &b]);
        assert_eq!(collect_vec(&seq), [(&"a", &1), (&"b", &2), (&"c", &3)]);
    }

    #[test]
    fn chain_with_mixes_sequence_types() {
        let seq = source::iter(vec![1, 2]).chain_with(source::once(3));
        assert_eq!(collect_vec(&seq), [1, 2, 3]);
        // Restartable.
        assert_eq!(collect_vec(&seq), [1, 2, 3]);
    }
}
