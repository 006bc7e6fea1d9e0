//! Command-line fake data generator.
//!
//! This binary delegates to `minifaker::cli` for parsing and generation,
//! keeping the CLI behaviour testable without spawning a process. Logs go to
//! stderr and are filtered through `RUST_LOG`.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use minifaker::cli::{CliError, ParseOutcome, generate, parse_args, usage};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let generated = generate(&options)?;
            debug!(
                seed = generated.seed,
                field = %options.field(),
                count = generated.values.len(),
                "generated values"
            );
            write_lines(io::stdout().lock(), &generated.values);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    if let Err(err) = out.write_all(usage().as_bytes()) {
        drop(err);
    }
}

fn write_lines(mut out: impl Write, lines: &[String]) {
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}
