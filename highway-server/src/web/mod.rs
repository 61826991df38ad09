//! Web layer for the highway planner.
//!
//! Provides HTTP endpoints for managing stations and vehicles and for
//! planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
