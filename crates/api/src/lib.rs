//! HTTP API composition for the Stonegate backend
//!
//! Wires the domain routers, the upload endpoints, and the router-level
//! fallbacks into one application. Service collaborators (database pool,
//! email, storage) are constructed by the caller and injected, so tests
//! can substitute mocks.

pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    response::Response,
    Router,
};
use serde_json::json;
use sqlx::PgPool;

use stonegate_accounts::{AccountsState, UserRepository};
use stonegate_auth::AuthConfig;
use stonegate_common::{
    response::{self, messages},
    Config,
};
use stonegate_contact::{ContactMessageRepository, ContactState};
use stonegate_email::EmailService;
use stonegate_projects::{ProjectRepository, ProjectsState};
use stonegate_storage::StorageService;
use stonegate_team::{TeamMemberRepository, TeamState};

use crate::handlers::uploads::{self, UploadsState};

/// Request bodies (including multipart uploads) are capped at 10 MB
const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Create the main application router with all routes and middleware
pub fn create_app(
    config: &Config,
    pool: PgPool,
    email: Arc<dyn EmailService>,
    storage: Arc<dyn StorageService>,
) -> Router {
    let auth = AuthConfig::new(config.jwt_secret.clone(), config.token_ttl_secs);

    let accounts_state = AccountsState {
        users: UserRepository::new(pool.clone()),
        auth: auth.clone(),
    };
    let projects_state = ProjectsState {
        projects: ProjectRepository::new(pool.clone()),
        storage: storage.clone(),
        auth: auth.clone(),
    };
    let team_state = TeamState {
        members: TeamMemberRepository::new(pool.clone()),
        storage: storage.clone(),
        auth: auth.clone(),
    };
    let contact_state = ContactState {
        contact_messages: ContactMessageRepository::new(pool),
        email,
        auth: auth.clone(),
    };
    let uploads_state = UploadsState { storage, auth };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest(
            "/api/auth",
            stonegate_accounts::routes().with_state(accounts_state),
        )
        .nest(
            "/api/project",
            stonegate_projects::routes().with_state(projects_state),
        )
        .nest("/api/team", stonegate_team::routes().with_state(team_state))
        .nest(
            "/api/contact",
            stonegate_contact::routes().with_state(contact_state),
        )
        .nest(
            "/api/uploads",
            uploads::routes().with_state(uploads_state),
        )
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Catch-all for unmatched routes: a fixed 404 envelope naming the path
async fn route_not_found(uri: Uri) -> Response {
    response::fail(
        messages::ROUTE_NOT_FOUND,
        StatusCode::NOT_FOUND,
        Some(json!({
            "details": format!("The requested route '{}' does not exist", uri.path())
        })),
    )
}
