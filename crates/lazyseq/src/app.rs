//! Application entry point and dispatch.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use tracing::{debug, warn};

use lazyseq_combinators::{cycle, map, range, range_from, slice, slice_until};
use lazyseq_core::observers::{CountingObserver, LoggingObserver};
use lazyseq_core::{cancellable, CancellationToken, ObserverSet, Sequence};

use crate::completion::generate_completion;
use crate::config::{AppConfig, OutputFormat};
use crate::errors::CliError;
use crate::output::{format_summary, write_summary_json, write_value, Outcome, RunSummary};

/// The assembled pipeline, before it goes through the bridge.
pub type Pipeline = Box<dyn Sequence<Item = i64> + Send + Sync>;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<Outcome> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(Outcome::Completed);
    }

    config.validate()?;
    let pipeline = build_pipeline(config)?;
    let token = match config.timeout_duration()? {
        Some(timeout) => CancellationToken::with_timeout(timeout),
        None => CancellationToken::new(),
    };
    ctrlc_handler(token.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = drive(pipeline, &token, config.format, &mut out)?;
    out.flush().map_err(CliError::from)?;

    if config.verbose {
        eprintln!("{}", format_summary(&summary));
    }
    Ok(summary.outcome)
}

/// Assemble range -> window -> cycle -> take -> interval from the flags.
pub fn build_pipeline(config: &AppConfig) -> Result<Pipeline, CliError> {
    let mut seq: Pipeline = match config.end {
        Some(end) => Box::new(range(config.start, end, config.step)?),
        None => Box::new(range_from(config.start, config.step)),
    };
    if let Some((start, end, step)) = config.window() {
        seq = Box::new(slice(seq, start, end, step)?);
    }
    if config.cycle {
        seq = Box::new(cycle(seq));
    }
    if let Some(take) = config.take {
        seq = Box::new(slice_until(seq, take, 1)?);
    }
    // Pacing sits below the bridge, so a deadline can interrupt a pause.
    if let Some(pause) = config.interval_duration()? {
        seq = Box::new(map(seq, move |v| {
            thread::sleep(pause);
            v
        }));
    }
    debug!(
        start = config.start,
        end = ?config.end,
        step = config.step,
        window = ?config.window(),
        cycle = config.cycle,
        "pipeline assembled"
    );
    Ok(seq)
}

/// Consume `pipeline` through the cancellable bridge, writing values to
/// `out` as they arrive.
pub fn drive(
    pipeline: Pipeline,
    token: &CancellationToken,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<RunSummary, CliError> {
    let counter = Arc::new(CountingObserver::new());
    let observers = ObserverSet::new();
    observers.register(counter.clone());
    observers.register(Arc::new(LoggingObserver::new("cli")));
    let bridge = cancellable(token.clone(), pipeline).with_observer(Arc::new(observers));

    let mut values = Vec::new();
    let mut count = 0usize;
    let mut write_error = None;
    let _ = bridge.run(&mut |v| {
        count += 1;
        match format {
            OutputFormat::Json => values.push(v),
            OutputFormat::Text => {
                if let Err(e) = write_value(out, v) {
                    write_error = Some(e);
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    });

    if let Some(e) = write_error {
        // A closed pipe (`lazyseq | head`) is a normal way to stop reading.
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(e.into());
        }
        debug!("stdout closed, stopping");
    }

    let counts = counter.counts();
    let outcome = if counts.cancelled > 0 {
        Outcome::from_token(token)
    } else {
        Outcome::Completed
    };
    debug!(pulls = counts.pulls, delivered = counts.delivered, ?outcome, "run finished");

    let summary = RunSummary {
        values,
        count,
        outcome,
    };
    if format == OutputFormat::Json {
        write_summary_json(out, &summary)?;
    }
    Ok(summary)
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || {
        cancel.cancel();
    }) {
        warn!("cannot install Ctrl+C handler: {e}");
    }
}
