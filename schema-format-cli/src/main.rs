// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

mod cli;
mod logging;

/// Exit status for operational errors (unreadable files, unknown formats),
/// distinct from the plain failure status used for violations.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
