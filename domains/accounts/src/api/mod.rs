//! API layer for the accounts domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod routes;
mod state;

pub use routes::routes;
pub use state::AccountsState;
