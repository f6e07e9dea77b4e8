//! Route definitions for the contact domain API

use axum::{routing::get, Router};

use super::handlers::contact_messages;
use super::state::ContactState;

/// Create all contact domain API routes (mounted under `/api/contact`)
pub fn routes() -> Router<ContactState> {
    Router::new()
        .route(
            "/",
            get(contact_messages::list_contact_messages)
                .post(contact_messages::create_contact_message),
        )
        .route("/{id}", get(contact_messages::get_contact_message))
}
