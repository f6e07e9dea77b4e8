//! Contact domain state

use std::sync::Arc;

use axum::extract::FromRef;
use stonegate_auth::AuthConfig;
use stonegate_email::EmailService;

use crate::repository::ContactMessageRepository;

/// Application state for the contact domain
#[derive(Clone)]
pub struct ContactState {
    pub contact_messages: ContactMessageRepository,
    pub email: Arc<dyn EmailService>,
    pub auth: AuthConfig,
}

impl FromRef<ContactState> for AuthConfig {
    fn from_ref(state: &ContactState) -> Self {
        state.auth.clone()
    }
}
