//! Run outcome and output formatting.

use std::io::{self, Write};

use serde::Serialize;

use lazyseq_core::{CancellationToken, SeqError};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The pipeline produced everything it was configured to produce.
    Completed,
    /// The `--timeout` deadline cut the run short.
    TimedOut,
    /// Ctrl+C cut the run short.
    Interrupted,
}

impl Outcome {
    /// Classify a run the bridge reported as cancelled.
    pub fn from_token(token: &CancellationToken) -> Self {
        match token.check_cancelled() {
            Ok(()) => Outcome::Completed,
            Err(SeqError::Cancelled) => Outcome::Interrupted,
            Err(_) => Outcome::TimedOut,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Completed => "completed",
            Outcome::TimedOut => "timed_out",
            Outcome::Interrupted => "interrupted",
        }
    }
}

/// Summary of one run, as printed by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub values: Vec<i64>,
    pub count: usize,
    pub outcome: Outcome,
}

/// Write one value in text format.
pub fn write_value(out: &mut dyn Write, value: i64) -> io::Result<()> {
    writeln!(out, "{value}")
}

/// Write the JSON summary on a single line.
pub fn write_summary_json(out: &mut dyn Write, summary: &RunSummary) -> serde_json::Result<()> {
    serde_json::to_writer(&mut *out, summary)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Human-readable one-line summary for stderr.
#[must_use]
pub fn format_summary(summary: &RunSummary) -> String {
    format!("{} values, {}", summary.count, summary.outcome.as_str())
}
