//! Domain entities for the accounts domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Maximum length of a user's full name
pub const FULL_NAME_MAX: usize = 100;

/// Password length bounds
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 40;

/// Admin user entity.
///
/// The password hash never leaves the server: it is skipped on
/// serialization, so the entity doubles as the public user view.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email_address: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Check the password policy: 8-40 characters with at least one lowercase
/// letter, one uppercase letter, and one digit.
pub fn validate_password_policy(password: &str) -> Result<(), &'static str> {
    if password.len() < PASSWORD_MIN || password.len() > PASSWORD_MAX {
        return Err("Password must be 8-40 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_policy_accepts_compliant_password() {
        assert!(validate_password_policy("Sup3rSecret").is_ok());
    }

    #[test]
    fn test_password_policy_rejects_weak_passwords() {
        assert!(validate_password_policy("short1A").is_err());
        assert!(validate_password_policy("alllowercase1").is_err());
        assert!(validate_password_policy("ALLUPPERCASE1").is_err());
        assert!(validate_password_policy("NoDigitsHere").is_err());
        let too_long = format!("Aa1{}", "x".repeat(40));
        assert!(validate_password_policy(&too_long).is_err());
    }

    #[test]
    fn test_user_serialization_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            full_name: Some("Site Admin".to_string()),
            email_address: "admin@example.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["emailAddress"], "admin@example.com");
        assert_eq!(json["fullName"], "Site Admin");
        assert!(json.get("_id").is_some());
    }
}
