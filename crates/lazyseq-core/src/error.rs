//! Error type shared by the lazyseq crates.

/// Error type for sequence construction and cancellation checkpoints.
///
/// Exhaustion, early stop and cancellation of a running sequence are
/// ordinary control flow and never surface as a `SeqError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A constructor was given a parameter it cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The cancellation token was cancelled explicitly.
    #[error("iteration cancelled")]
    Cancelled,

    /// The cancellation token's deadline passed.
    #[error("iteration timed out after {0}")]
    Timeout(String),
}

impl SeqError {
    /// Shorthand for building an [`SeqError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
