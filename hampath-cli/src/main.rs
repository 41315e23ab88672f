//! CLI entry point for the hampath search tool.
//!
//! Parses arguments with clap, runs the requested search, prints the summary
//! to stdout, and maps the outcome to an exit status: 0 when a path was
//! found, 1 when none exists, 2 for any error.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hampath_cli::{
    cli::{Cli, CliError, EXIT_FAILURE, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parses arguments, executes the command, and renders the summary,
/// returning the exit status the summary maps to.
fn try_main() -> Result<u8> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(summary.exit_code())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::from(EXIT_FAILURE);
    }

    match try_main() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            let code_field = err
                .downcast_ref::<CliError>()
                .map(|cli_error| field::display(cli_error.code()));
            let message = format!("{err:#}");
            error!(
                error = %message,
                code = code_field,
                "command execution failed"
            );
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
