//! Text command language.
//!
//! The line-oriented protocol the highway was first driven by:
//!
//! ```text
//! add-station 20 3 5 10 15
//! add-car 20 40
//! scrap-car 20 5
//! demolish-station 20
//! plan-route 0 50
//! ```
//!
//! Each command produces exactly one reply line.

mod parse;
mod run;

pub use parse::{Command, CommandError, Parser};
pub use run::{Reply, RunError, execute, run, run_file, run_script};
