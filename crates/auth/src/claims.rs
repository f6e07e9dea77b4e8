//! JWT claims types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decoded identity-token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email address of the subject
    pub email: String,
    /// Optional role marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

impl Claims {
    /// Parse the subject as a user id
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parses_valid_subject() {
        let id = Uuid::new_v4();
        let claims = Claims {
            sub: id.to_string(),
            email: "admin@example.com".to_string(),
            role: None,
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.user_id(), Some(id));
    }

    #[test]
    fn test_user_id_rejects_garbage_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: "admin@example.com".to_string(),
            role: None,
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.user_id(), None);
    }
}
