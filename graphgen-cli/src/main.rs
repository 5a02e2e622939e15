//! CLI entry point for the graphgen generator.
//!
//! Parses command-line arguments with clap, seeds the deterministic
//! generator stream, writes the rendered graph to stdout, and maps
//! failures to a nonzero exit code with structured diagnostics on stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use graphgen_cli::{
    cli::{Cli, CliError, render_graph, run_cli},
    logging::{self, LoggingError},
};
use graphgen_core::{GraphErrorCode, SampleErrorCode};

/// Parse CLI arguments, generate the graph, render it, and flush the output
/// stream.
fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let rendered = run_cli(cli).context("failed to generate graph")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_graph(&rendered, &mut writer).context("failed to render graph")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

/// Walk the context chain for a [`CliError`] and surface its stable codes,
/// so wrapping layers do not hide them from log consumers.
fn structured_codes(err: &anyhow::Error) -> (Option<GraphErrorCode>, Option<SampleErrorCode>) {
    for cause in err.chain() {
        let cause: &(dyn std::error::Error + 'static) = cause;
        if let Some(CliError::Core(core)) = cause.downcast_ref::<CliError>() {
            return (Some(core.code()), core.sample_code());
        }
    }
    (None, None)
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, sample_code) = structured_codes(&err);
        error!(
            error = %err,
            code = ?code.map(GraphErrorCode::as_str),
            sample_code = ?sample_code.map(SampleErrorCode::as_str),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Emit a fallback diagnostic to stderr when tracing initialization fails.
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
