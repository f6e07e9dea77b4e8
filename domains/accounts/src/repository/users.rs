//! User repository

use sqlx::PgPool;
use stonegate_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::User;

const USER_COLUMNS: &str =
    "id, full_name, email_address, password_hash, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user. The email uniqueness constraint surfaces duplicate
    /// addresses as `RepositoryError::AlreadyExists`.
    pub async fn create(
        &self,
        full_name: Option<&str>,
        email_address: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let sql = format!(
            "INSERT INTO users (full_name, email_address, password_hash) \
             VALUES ($1, LOWER($2), $3) \
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(full_name)
            .bind(email_address)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Find user by email address (addresses are stored lowercased)
    pub async fn find_by_email(&self, email_address: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email_address = LOWER($1)");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email_address)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Apply a partial profile update; absent fields keep their value
    pub async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<&str>,
    ) -> Result<Option<User>, RepositoryError> {
        let sql = format!(
            "UPDATE users SET \
                full_name = COALESCE($2, full_name), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(full_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Replace the stored password hash
    pub async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let sql = format!(
            "UPDATE users SET password_hash = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(password_hash)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
