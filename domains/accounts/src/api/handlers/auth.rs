//! Authentication and profile API handlers
//!
//! Implements the admin account operations:
//! - POST /api/auth/signup - Register the admin user
//! - POST /api/auth/login - Exchange credentials for an access token
//! - GET /api/auth/user - Get the current user's record
//! - PATCH /api/auth/edit-profile - Update profile fields
//! - PATCH /api/auth/password - Change the password

use axum::{extract::State, http::StatusCode, response::Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stonegate_auth::{issue_token, AuthUser};
use stonegate_common::{
    response::{self, messages as common_messages},
    Error, Result, ValidatedJson,
};

use crate::domain::entities::{validate_password_policy, User};
use crate::domain::password::{hash_password, verify_password};
use crate::messages;
use crate::{AccountsState, UserRepository};

/// Request for registering the admin user
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,

    #[validate(email)]
    pub email_address: String,

    pub password: String,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email_address: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request for updating the profile
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,
}

/// Request for changing the password
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub password: String,
}

/// The user sub-object returned by signup and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email_address: String,
}

impl From<&User> for AuthUserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email_address: user.email_address.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    user: AuthUserView,
    access_token: String,
}

/// POST /api/auth/signup - Register the admin user
pub async fn signup(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<Response> {
    validate_password_policy(&request.password).map_err(|m| Error::Validation(m.to_string()))?;

    let password_hash = hash_password(&request.password)?;

    let user = state
        .users
        .create(
            request.full_name.as_deref(),
            &request.email_address,
            &password_hash,
        )
        .await
        .map_err(|e| match e {
            stonegate_common::RepositoryError::AlreadyExists => {
                Error::Conflict(messages::DUPLICATE_EMAIL.to_string())
            }
            other => other.into(),
        })?;

    let access_token = issue_token(user.id, &user.email_address, None, &state.auth)?;

    Ok(response::success(
        AuthResponse {
            user: AuthUserView::from(&user),
            access_token,
        },
        messages::USER_REGISTERED,
        StatusCode::CREATED,
    ))
}

/// POST /api/auth/login - Exchange credentials for an access token
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Response> {
    let user = state
        .users
        .find_by_email(&request.email_address)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| Error::Authentication(messages::USER_NOT_FOUND.to_string()))?;

    let matches = verify_password(&request.password, &user.password_hash)?;
    if !matches {
        return Err(Error::Authentication(
            messages::INVALID_CREDENTIALS.to_string(),
        ));
    }

    let access_token = issue_token(user.id, &user.email_address, None, &state.auth)?;

    Ok(response::success(
        AuthResponse {
            user: AuthUserView::from(&user),
            access_token,
        },
        messages::USER_LOGGED_IN,
        StatusCode::OK,
    ))
}

/// GET /api/auth/user - Get the current user's record
pub async fn get_user(
    AuthUser(claims): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Response> {
    let user = load_current_user(&state.users, &claims).await?;

    Ok(response::success(
        serde_json::json!({ "user": user }),
        messages::USER_DETAILS_FETCHED,
        StatusCode::OK,
    ))
}

/// PATCH /api/auth/edit-profile - Update profile fields
pub async fn edit_profile(
    AuthUser(claims): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Response> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| Error::Authentication(common_messages::INVALID_TOKEN.to_string()))?;

    let user = state
        .users
        .update_profile(user_id, request.full_name.as_deref())
        .await?
        .ok_or_else(|| Error::NotFound(messages::USER_NOT_FOUND.to_string()))?;

    Ok(response::success(
        serde_json::json!({ "user": user }),
        messages::PROFILE_UPDATED,
        StatusCode::OK,
    ))
}

/// PATCH /api/auth/password - Change the password
pub async fn change_password(
    AuthUser(claims): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<Response> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| Error::Authentication(common_messages::INVALID_TOKEN.to_string()))?;

    validate_password_policy(&request.password).map_err(|m| Error::Validation(m.to_string()))?;

    let password_hash = hash_password(&request.password)?;

    state
        .users
        .update_password(user_id, &password_hash)
        .await?
        .ok_or_else(|| Error::NotFound(messages::USER_NOT_FOUND.to_string()))?;

    Ok(response::success(
        serde_json::json!({}),
        messages::PASSWORD_UPDATED,
        StatusCode::OK,
    ))
}

async fn load_current_user(users: &UserRepository, claims: &stonegate_auth::Claims) -> Result<User> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| Error::Authentication(common_messages::INVALID_TOKEN.to_string()))?;

    users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::USER_NOT_FOUND.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            full_name: Some("Site Admin".to_string()),
            email_address: "admin@example.com".to_string(),
            password: "Sup3rSecret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            full_name: None,
            email_address: "not-an-email".to_string(),
            password: "Sup3rSecret".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_login_request_rejects_empty_fields() {
        let empty = LoginRequest {
            email_address: "".to_string(),
            password: "".to_string(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_auth_user_view_wire_shape() {
        let user = User {
            id: Uuid::new_v4(),
            full_name: Some("Site Admin".to_string()),
            email_address: "admin@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(AuthUserView::from(&user)).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["fullName"], "Site Admin");
        assert_eq!(json["emailAddress"], "admin@example.com");
        assert!(json.get("passwordHash").is_none());
    }
}
