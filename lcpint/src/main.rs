//! `lcpint -i <input_file> [-d <deepen_level>] [-a <alphabet.json>]`
//!
//! Writes `<input_file>-level<deepen_level>.txt`. Logging goes to stderr and
//! is controlled with `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lcpint::{cli, pipeline};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config = match cli::parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match pipeline::run(&config) {
        Ok(summary) => {
            tracing::debug!(output = %summary.output.display(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
