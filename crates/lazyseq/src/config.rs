//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::errors::CliError;

/// lazyseq: stream an integer range through slicing, cycling and an
/// optional deadline.
#[derive(Parser, Debug, Clone)]
#[command(name = "lazyseq", version, about)]
pub struct AppConfig {
    /// First value of the range.
    #[arg(long, default_value_t = 0, env = "LAZYSEQ_START", allow_negative_numbers = true)]
    pub start: i64,

    /// End of the range (exclusive). Without it the range never ends.
    #[arg(long, env = "LAZYSEQ_END", allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Distance between consecutive values; must be non-zero.
    #[arg(long, default_value_t = 1, env = "LAZYSEQ_STEP", allow_negative_numbers = true)]
    pub step: i64,

    /// Discard this many leading values.
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Keep at most this many positions after the skipped ones.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Keep every n-th position of the window.
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// Replay the windowed values forever.
    #[arg(long)]
    pub cycle: bool,

    /// Stop after this many output values.
    #[arg(long)]
    pub take: Option<usize>,

    /// Stop once this much time has passed (e.g. "250ms", "2s", "1m").
    #[arg(long, env = "LAZYSEQ_TIMEOUT")]
    pub timeout: Option<String>,

    /// Pause before producing each value (e.g. "10ms").
    #[arg(long)]
    pub interval: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output (debug logging on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// How values and the run summary are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line, streamed as produced.
    Text,
    /// A single JSON run summary.
    Json,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The `--timeout` flag as a duration.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, CliError> {
        parse_optional("--timeout", self.timeout.as_deref())
    }

    /// The `--interval` flag as a duration.
    pub fn interval_duration(&self) -> Result<Option<Duration>, CliError> {
        parse_optional("--interval", self.interval.as_deref())
    }

    /// `(start, end, step)` of the positional window, if any window flag
    /// was given.
    #[must_use]
    pub fn window(&self) -> Option<(usize, usize, usize)> {
        if self.skip == 0 && self.limit.is_none() && self.every == 1 {
            return None;
        }
        let end = self
            .limit
            .map_or(usize::MAX, |limit| self.skip.saturating_add(limit));
        Some((self.skip, end, self.every))
    }

    /// Whether the configured pipeline can run forever.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        if self.take.is_some() {
            return false;
        }
        self.cycle || (self.end.is_none() && self.limit.is_none())
    }

    /// Reject flag combinations that cannot run.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.step == 0 {
            return Err(CliError::Config("--step must be non-zero".into()));
        }
        if self.every == 0 {
            return Err(CliError::Config("--every must be at least 1".into()));
        }
        if self.is_unbounded() && self.timeout.is_none() {
            return Err(CliError::Config(
                "unbounded sequence: give --end, --limit, --take or --timeout".into(),
            ));
        }
        self.timeout_duration()?;
        self.interval_duration()?;
        Ok(())
    }
}

fn parse_optional(flag: &str, value: Option<&str>) -> Result<Option<Duration>, CliError> {
    value
        .map(|s| {
            parse_duration(s)
                .ok_or_else(|| CliError::Config(format!("{flag}: cannot parse duration {s:?}")))
        })
        .transpose()
}

/// Parse a duration string like "250ms", "30s", "5m", "1h". A bare number
/// is seconds.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
