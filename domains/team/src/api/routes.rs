//! Route definitions for the team domain API

use axum::{routing::get, Router};

use super::handlers::team_members;
use super::state::TeamState;

/// Create all team domain API routes (mounted under `/api/team`)
pub fn routes() -> Router<TeamState> {
    Router::new()
        .route(
            "/",
            get(team_members::list_team_members).post(team_members::create_team_member),
        )
        .route(
            "/{id}",
            get(team_members::get_team_member)
                .patch(team_members::update_team_member)
                .delete(team_members::delete_team_member),
        )
}
