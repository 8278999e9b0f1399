//! Entry point for the `powergrid` binary.
//!
//! Parses the single input-file argument, computes the minimum spanning tree
//! and prints the report to stdout. Failures print one `Error:` line to
//! stderr and exit with `1`, or `2` when the substations cannot all be
//! connected.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use powergrid_cli::{
    cli::{Cli, CliError, USAGE, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{debug, error, field};

/// Execute the command, render the report and flush stdout.
fn try_main(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!(error = %err, "argument parsing failed");
            report(USAGE);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = try_main(cli) {
        let cli_error = err.downcast_ref::<CliError>();
        let code_field = cli_error.map(|cli_error| field::display(cli_error.code()));
        error!(error = %err, code = code_field, "command execution failed");

        // The outer context is for logs; users see the underlying message.
        let message = cli_error.map_or_else(|| format!("{err:#}"), ToString::to_string);
        report(&format!("Error: {message}"));
        return ExitCode::from(cli_error.map_or(1, CliError::exit_code));
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "User-facing error line, independent of the log filter"
)]
fn report(line: &str) {
    eprintln!("{line}");
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
