//! Route definitions for the projects domain API

use axum::{routing::get, Router};

use super::handlers::projects;
use super::state::ProjectsState;

/// Create all projects domain API routes (mounted under `/api/project`)
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
}
