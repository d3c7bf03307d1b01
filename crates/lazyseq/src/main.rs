//! lazyseq: stream an integer range through lazy combinators.

use lazyseq_lib::{app, config, errors, version};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("{}", version::full_version());

    let code = match app::run(&config) {
        Ok(outcome) => errors::outcome_exit_code(outcome),
        Err(err) => {
            eprintln!("Error: {err:#}");
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}
