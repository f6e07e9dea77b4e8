//! Team domain state

use std::sync::Arc;

use axum::extract::FromRef;
use stonegate_auth::AuthConfig;
use stonegate_storage::StorageService;

use crate::repository::TeamMemberRepository;

/// Application state for the team domain
#[derive(Clone)]
pub struct TeamState {
    pub members: TeamMemberRepository,
    pub storage: Arc<dyn StorageService>,
    pub auth: AuthConfig,
}

impl FromRef<TeamState> for AuthConfig {
    fn from_ref(state: &TeamState) -> Self {
        state.auth.clone()
    }
}
