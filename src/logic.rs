use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{Args, OutputFormat};
use crate::config::Config;
use crate::constants::{DEFAULT_LOG_FILTER, READY_MESSAGE};

/// **The bootstrap**
///
/// Resolves the configuration, creates the data directories and announces
/// that everything is ready.
///
/// Initialization is all-or-nothing: the first failure is returned, and the
/// readiness line is printed only after both directories exist.
pub fn run() -> Result<Config> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.base_dir {
        Some(base_dir) => Config::init(base_dir)?,
        None => Config::init_from_current_dir()?,
    };

    announce_ready(&mut io::stdout().lock())?;

    // Standard output stays a single line; the dump goes next to the logs.
    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&config)
            .context("Couldn't serialize the configuration.")?;
        writeln!(io::stderr().lock(), "{}", json)
            .context("Couldn't write to standard error.")?;
    }

    debug!(?config, "bootstrap finished");

    Ok(config)
}

/// Writes the single readiness line.
pub fn announce_ready(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", READY_MESSAGE).context("Couldn't write the readiness notice.")
}

/// Logs go to standard error, so standard output carries only the readiness line.
///
/// The filter is taken from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}
