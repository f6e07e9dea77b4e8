//! API layer for the projects domain

pub mod handlers;
pub mod routes;
mod state;

pub use routes::routes;
pub use state::ProjectsState;
