//! Authentication configuration

/// Default token lifetime: one day
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, token_ttl_secs: u64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs,
        }
    }
}
