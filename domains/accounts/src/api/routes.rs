//! Route definitions for the accounts domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::auth;
use super::state::AccountsState;

/// Create all accounts domain API routes (mounted under `/api/auth`)
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/user", get(auth::get_user))
        .route("/edit-profile", patch(auth::edit_profile))
        .route("/password", patch(auth::change_password))
}
