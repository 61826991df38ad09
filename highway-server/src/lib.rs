//! Highway route planner.
//!
//! Keeps a highway of service stations, each with a fleet of vehicles, and
//! plans trips between stations with the fewest stops. Served over HTTP or
//! driven by a text command script.

pub mod command;
pub mod config;
pub mod domain;
pub mod highway;
pub mod logging;
pub mod planner;
pub mod stations;
pub mod web;

pub use highway::Highway;
