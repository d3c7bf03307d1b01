//! # lazyseq-core
//!
//! Core of the lazyseq library: the push-style [`Sequence`] protocol,
//! adapters from plain Rust values, the push-to-pull [`PullHandle`], and
//! the [`Cancellable`] bridge that stops a sequence when a
//! [`CancellationToken`] fires.

pub mod bridge;
pub mod cancel;
pub mod error;
pub mod observer;
pub mod observers;
pub mod pull;
pub mod sequence;
pub mod source;

// Re-exports
pub use bridge::{cancellable, Cancellable};
pub use cancel::CancellationToken;
pub use error::SeqError;
pub use observer::{BridgeEvent, BridgeObserver, ObserverSet};
pub use pull::PullHandle;
pub use sequence::{collect_vec, Accept, Downstream, PairedSequence, Sequence};

/// Collect at most `limit` values of `seq`, giving up once `token` fires.
///
/// This is a convenience wrapper around [`cancellable`] for the common
/// "take what arrives before the deadline" case.
///
/// # Example
/// ```
/// use lazyseq_core::{source, CancellationToken};
///
/// let token = CancellationToken::new();
/// let got = lazyseq_core::collect_until(&token, source::iter(0..), 3);
/// assert_eq!(got, [0, 1, 2]);
/// ```
pub fn collect_until<S>(token: &CancellationToken, seq: S, limit: usize) -> Vec<S::Item>
where
    S: Sequence + Sync,
    S::Item: Send,
{
    use std::ops::ControlFlow;

    let mut out = Vec::new();
    if limit == 0 {
        return out;
    }
    let _ = cancellable(token.clone(), seq).run(&mut |v| {
        out.push(v);
        if out.len() >= limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    out
}
