//! API layer for the team domain

pub mod handlers;
pub mod routes;
mod state;

pub use routes::routes;
pub use state::TeamState;
