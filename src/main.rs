//! CGI entry point: `long-multiplication MULTIPLIER MULTIPLICAND OUTPUT_TYPE PRINT_DESCRIPTION`

use std::io::{self, Write};
use std::process::ExitCode;

use long_multiplication::invocation;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the response, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = invocation::run(std::env::args_os(), &mut out);

    if let Err(err) = out.flush() {
        tracing::error!(error = %err, "could not flush standard output");
        return ExitCode::from(invocation::EXIT_FAILURE);
    }

    ExitCode::from(code)
}
