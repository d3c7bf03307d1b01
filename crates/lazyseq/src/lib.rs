//! lazyseq library: application logic for the `lazyseq` command.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod output;
pub mod version;
