//! Run a highway command script.
//!
//! Usage: `highway-cli [SCRIPT]`. Reads from stdin when no script is given
//! and prints one reply per command on stdout.

use std::io;
use std::process::ExitCode;

use highway_server::Highway;
use highway_server::command::{self, RunError};
use highway_server::logging;
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    let mut highway = Highway::new();
    let stdout = io::stdout().lock();

    let result = match std::env::args_os().nth(1) {
        Some(path) => command::run_file(&mut highway, path, stdout),
        None => command::run(&mut highway, io::stdin().lock(), stdout),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(RunError::Command(e)) => {
            error!(error = %e, "malformed script");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "script failed");
            ExitCode::FAILURE
        }
    }
}
