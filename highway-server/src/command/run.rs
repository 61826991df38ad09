//! Executing commands against a highway.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::Route;
use crate::highway::Highway;

use super::parse::{Command, CommandError, Parser};

/// Outcome of one command, printed as one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Added,
    NotAdded,
    Demolished,
    NotDemolished,
    Scrapped,
    NotScrapped,
    Route(Route),
    NoRoute,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Added => f.write_str("added"),
            Reply::NotAdded => f.write_str("not added"),
            Reply::Demolished => f.write_str("demolished"),
            Reply::NotDemolished => f.write_str("not demolished"),
            Reply::Scrapped => f.write_str("scrapped"),
            Reply::NotScrapped => f.write_str("not scrapped"),
            Reply::Route(route) => write!(f, "{route}"),
            Reply::NoRoute => f.write_str("no route"),
        }
    }
}

/// Error from running a script.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Reading the script or writing replies failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The script is malformed
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Apply one command.
pub fn execute(highway: &mut Highway, command: Command) -> Reply {
    match command {
        Command::AddStation { distance, vehicles } => {
            match highway.add_station(distance, vehicles) {
                Ok(()) => Reply::Added,
                Err(_) => Reply::NotAdded,
            }
        }
        Command::DemolishStation { distance } => match highway.remove_station(distance) {
            Ok(()) => Reply::Demolished,
            Err(_) => Reply::NotDemolished,
        },
        Command::AddCar { distance, autonomy } => {
            match highway.add_vehicle(distance, autonomy) {
                Ok(()) => Reply::Added,
                Err(_) => Reply::NotAdded,
            }
        }
        Command::ScrapCar { distance, autonomy } => {
            match highway.remove_vehicle(distance, autonomy) {
                Ok(()) => Reply::Scrapped,
                Err(_) => Reply::NotScrapped,
            }
        }
        Command::PlanRoute { start, end } => match highway.plan_route(start, end) {
            Some(route) => Reply::Route(route),
            None => Reply::NoRoute,
        },
    }
}

/// Run a whole script and collect the replies.
///
/// Commands before a malformed one have already been applied when the
/// error is returned.
pub fn run_script(highway: &mut Highway, input: &str) -> Result<Vec<Reply>, CommandError> {
    let mut replies = Vec::new();
    for command in Parser::new(input) {
        let command = command.inspect_err(|e| warn!(error = %e, "rejecting script"))?;
        replies.push(execute(highway, command));
    }
    debug!(commands = replies.len(), "script complete");
    Ok(replies)
}

/// Read a script from `input` and write one reply per line to `output`.
///
/// Returns the number of commands executed.
pub fn run<R: Read, W: Write>(
    highway: &mut Highway,
    mut input: R,
    mut output: W,
) -> Result<usize, RunError> {
    let mut script = String::new();
    input.read_to_string(&mut script)?;

    let mut executed = 0;
    for command in Parser::new(&script) {
        let reply = execute(highway, command?);
        writeln!(output, "{reply}")?;
        executed += 1;
    }
    output.flush()?;
    Ok(executed)
}

/// Run the script stored at `path`.
pub fn run_file<W: Write>(
    highway: &mut Highway,
    path: impl AsRef<Path>,
    output: W,
) -> Result<usize, RunError> {
    let file = File::open(path.as_ref())?;
    run(highway, BufReader::new(file), output)
}
