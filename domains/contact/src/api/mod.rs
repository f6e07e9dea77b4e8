//! API layer for the contact domain

pub mod handlers;
pub mod routes;
mod state;

pub use routes::routes;
pub use state::ContactState;
