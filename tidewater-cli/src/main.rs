//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use tidewater_cli::CliError;

fn main() -> ExitCode {
    if let Err(err) = tidewater_cli::init_logging() {
        eprintln!("tidewater: {err}");
    }
    match tidewater_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("tidewater: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
