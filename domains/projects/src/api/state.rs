//! Projects domain state

use std::sync::Arc;

use axum::extract::FromRef;
use stonegate_auth::AuthConfig;
use stonegate_storage::StorageService;

use crate::repository::ProjectRepository;

/// Application state for the projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub projects: ProjectRepository,
    pub storage: Arc<dyn StorageService>,
    pub auth: AuthConfig,
}

impl FromRef<ProjectsState> for AuthConfig {
    fn from_ref(state: &ProjectsState) -> Self {
        state.auth.clone()
    }
}
