//! Property-based tests for the combinator layer.

use proptest::prelude::*;

use lazyseq_combinators::{
    chain, collect_vec, interleave, range, slice, source, zip, zip_longest, SequenceExt,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// `range` yields exactly what a stepped std range yields.
    #[test]
    fn range_matches_std(start in -200i64..200, end in -200i64..200, step in -17i64..17) {
        prop_assume!(step != 0);
        let got = collect_vec(&range(start, end, step).unwrap());
        let expected: Vec<i64> = if step > 0 {
            (start..end).step_by(usize::try_from(step).unwrap()).collect()
        } else {
            let mut down = Vec::new();
            let mut x = start;
            while x > end {
                down.push(x);
                x += step;
            }
            down
        };
        prop_assert_eq!(got.len() as u64, range(start, end, step).unwrap().len());
        prop_assert_eq!(got, expected);
    }

    /// `chain` is concatenation.
    #[test]
    fn chain_is_concatenation(parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..6)) {
        let seq = chain(parts.iter().cloned().map(source::iter));
        let expected: Vec<u8> = parts.concat();
        prop_assert_eq!(collect_vec(&seq), expected);
    }

    /// `zip` yields min(m, n) element-wise pairs.
    #[test]
    fn zip_length_is_min(a in prop::collection::vec(any::<i16>(), 0..20), b in prop::collection::vec(any::<i16>(), 0..20)) {
        let got = collect_vec(&zip(source::iter(a.clone()), source::iter(b.clone())));
        let expected: Vec<(i16, i16)> = a.iter().copied().zip(b.iter().copied()).collect();
        prop_assert_eq!(got, expected);
    }

    /// `zip_longest` yields max(m, n) pairs, padded with the fill value.
    #[test]
    fn zip_longest_length_is_max(a in prop::collection::vec(1i32..100, 0..20), b in prop::collection::vec(1i32..100, 0..20)) {
        let got = collect_vec(&zip_longest(0, source::iter(a.clone()), source::iter(b.clone())));
        prop_assert_eq!(got.len(), a.len().max(b.len()));
        for (i, (x, y)) in got.into_iter().enumerate() {
            prop_assert_eq!(x, a.get(i).copied().unwrap_or(0));
            prop_assert_eq!(y, b.get(i).copied().unwrap_or(0));
        }
    }

    /// `slice` agrees with std `skip`/`take`/`step_by`.
    #[test]
    fn slice_matches_std(len in 0usize..40, start in 0usize..50, end in 0usize..50, step in 1usize..6) {
        let data: Vec<usize> = (0..len).collect();
        let got = collect_vec(&slice(source::iter(data.clone()), start, end, step).unwrap());
        let expected: Vec<usize> = data
            .iter()
            .copied()
            .skip(start)
            .take(end.saturating_sub(start))
            .step_by(step)
            .collect();
        prop_assert_eq!(got, expected);
    }

    /// Re-slicing a sliced sequence over its own length reproduces it.
    #[test]
    fn reslice_is_idempotent(len in 0usize..40, start in 0usize..20, end in 0usize..40, step in 1usize..5) {
        let once = slice(source::iter(0..len), start, end, step).unwrap();
        let first = collect_vec(&once);
        let again = slice(&once, 0, first.len(), 1).unwrap();
        prop_assert_eq!(collect_vec(&again), first);
    }

    /// Two interleaved inputs of equal length alternate perfectly.
    #[test]
    fn interleave_alternates(a in prop::collection::vec(any::<u8>(), 0..16)) {
        let b: Vec<u8> = a.iter().map(|v| v.wrapping_add(1)).collect();
        let got = collect_vec(&interleave([source::iter(a.clone()), source::iter(b.clone())]));
        let expected: Vec<u8> = a.iter().zip(&b).flat_map(|(x, y)| [*x, *y]).collect();
        prop_assert_eq!(got, expected);
    }

    /// Cycling a non-empty input and taking k values repeats it in order.
    #[test]
    fn cycle_repeats_input(a in prop::collection::vec(any::<u8>(), 1..8), k in 0usize..40) {
        let got = collect_vec(&source::iter(a.clone()).cycle().slice_until(k, 1).unwrap());
        let expected: Vec<u8> = a.iter().copied().cycle().take(k).collect();
        prop_assert_eq!(got, expected);
    }
}
