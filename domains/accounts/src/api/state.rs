//! Accounts domain state

use axum::extract::FromRef;
use stonegate_auth::AuthConfig;

use crate::repository::UserRepository;

/// Application state for the accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: UserRepository,
    pub auth: AuthConfig,
}

impl FromRef<AccountsState> for AuthConfig {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
