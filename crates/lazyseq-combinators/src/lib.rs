//! # lazyseq-combinators
//!
//! Combinators over the [`Sequence`] protocol: chaining, mapping,
//! filtering, zipping, slicing, ranges, repetition and terminal
//! consumers. Every combinator is itself a `Sequence`, so they compose
//! freely; [`SequenceExt`] offers the same operations in method form.
//!
//! Pairs are ordinary tuple items, so each combinator works unchanged on
//! key/value sequences.
//!
//! # Example
//! ```
//! use lazyseq_combinators::{range, SequenceExt};
//!
//! let evens = range(0, 10, 1)
//!     .unwrap()
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * 10)
//!     .collect_vec();
//! assert_eq!(evens, [0, 20, 40, 60, 80]);
//! ```

pub mod chain;
pub mod consume;
pub mod ext;
pub mod pair;
pub mod range;
pub mod slice;
pub mod transform;
pub mod zip;

pub use chain::{chain, chain_maps, chain_slices, Chain, ChainWith};
pub use consume::{all, any, collect_into, collect_into_slice, count, first};
pub use ext::SequenceExt;
pub use pair::{flatten, keys, pairwise, values, Flatten, Keys, Pairwise, Values};
pub use range::{
    cycle, range, range_from, range_until, repeat, repeat_n, Cycle, Range, RangeFrom, Repeat,
    RepeatN,
};
pub use slice::{drop_while, slice, slice_until, take_while, DropWhile, Slice, TakeWhile};
pub use transform::{
    accumulate, enumerate, enumerate_from, filter, map, Accumulate, Enumerate, Filter, Map,
};
pub use zip::{
    compress, interleave, interleave_longest, zip, zip_longest, Compress, Interleave,
    InterleaveLongest, Zip, ZipLongest,
};

pub use lazyseq_core::{cancellable, collect_vec, source, CancellationToken, SeqError, Sequence};
