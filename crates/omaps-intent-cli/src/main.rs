//! CLI entrypoint for resolving and replaying map requests.
//!
//! The binary delegates to [`omaps_intent_cli::run`], which loads
//! configuration, installs telemetry, and runs the selected subcommand.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    omaps_intent_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
