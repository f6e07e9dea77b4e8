//! JWT credential codec: issue and verify

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issue a signed identity token for the given subject.
///
/// The claims carry issued-at and expiry (now + configured TTL); signing is
/// HS256 with the server secret. Pure computation, no side effects.
pub fn issue_token(
    user_id: Uuid,
    email: &str,
    role: Option<&str>,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp() as u64;
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.map(String::from),
        iat: now,
        exp: now + config.token_ttl_secs,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "failed to sign identity token");
        AuthError::Issuance
    })
}

/// Verify a token's signature and expiry and return its claims.
///
/// Verification is binary: signature mismatch, malformed payload, and
/// expired tokens all collapse into `InvalidCredential`.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidCredential
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::new("test-secret-key", 3600)
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = issue_token(user_id, "admin@example.com", Some("admin"), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = verify_token("not.a.token", &test_config());
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue_token(Uuid::new_v4(), "a@b.com", None, &test_config()).unwrap();
        let other = AuthConfig::new("different-secret", 3600);
        let result = verify_token(&token, &other);
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = test_config();
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "a@b.com".to_string(),
            role: None,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .unwrap();

        let result = verify_token(&token, &config);
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }
}
