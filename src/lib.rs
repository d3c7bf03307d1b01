//! Cross-crate integration tests for the lazyseq workspace live in `tests/`.
