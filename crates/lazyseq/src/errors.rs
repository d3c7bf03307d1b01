//! Error handling and exit codes.

use lazyseq_core::SeqError;

use crate::output::Outcome;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The run was cut short by `--timeout`.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

/// Errors raised by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Sequence(#[from] SeqError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Map a sequence error to its exit code.
pub fn handle_error(err: &SeqError) -> i32 {
    match err {
        SeqError::InvalidArgument(_) => exit_codes::ERROR_CONFIG,
        SeqError::Cancelled => exit_codes::ERROR_CANCELED,
        SeqError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
    }
}

/// Exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(CliError::Sequence(e)) => handle_error(e),
        Some(CliError::Io(_) | CliError::Json(_)) => exit_codes::ERROR_GENERIC,
        None => err
            .downcast_ref::<SeqError>()
            .map_or(exit_codes::ERROR_GENERIC, handle_error),
    }
}

/// Exit code for a run that finished without error.
pub fn outcome_exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Completed => exit_codes::SUCCESS,
        Outcome::TimedOut => exit_codes::ERROR_TIMEOUT,
        Outcome::Interrupted => exit_codes::ERROR_CANCELED,
    }
}
