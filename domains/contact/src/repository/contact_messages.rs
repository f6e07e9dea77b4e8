//! Contact message repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use stonegate_common::{PageStage, RepositoryError, SearchFilter};
use uuid::Uuid;

use crate::domain::entities::{ContactMessage, ContactMessageSummary};

const MESSAGE_COLUMNS: &str =
    "id, first_name, last_name, email_address, message, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct ContactMessageListRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email_address: String,
    message: String,
    created_at: DateTime<Utc>,
    total: i64,
}

#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email_address: &str,
        message: &str,
    ) -> Result<ContactMessage, RepositoryError> {
        let sql = format!(
            "INSERT INTO contact_messages (first_name, last_name, email_address, message) \
             VALUES ($1, $2, LOWER($3), $4) \
             RETURNING {MESSAGE_COLUMNS}"
        );
        let contact_message = sqlx::query_as::<_, ContactMessage>(&sql)
            .bind(first_name)
            .bind(last_name)
            .bind(email_address)
            .bind(message)
            .fetch_one(&self.pool)
            .await?;

        Ok(contact_message)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, RepositoryError> {
        let sql = format!("SELECT {MESSAGE_COLUMNS} FROM contact_messages WHERE id = $1");
        let contact_message = sqlx::query_as::<_, ContactMessage>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contact_message)
    }

    /// Fetch one page of (optionally filtered) contact messages plus the
    /// pre-pagination total, from a single statement snapshot.
    pub async fn list(
        &self,
        filter: Option<&SearchFilter>,
        page: &PageStage,
    ) -> Result<(Vec<ContactMessageSummary>, i64), RepositoryError> {
        let mut sql = String::from(
            "SELECT id, first_name, last_name, email_address, message, created_at, \
                    COUNT(*) OVER () AS total \
             FROM contact_messages",
        );
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(1));
        }
        sql.push(' ');
        sql.push_str(&page.to_sql());

        let mut query = sqlx::query_as::<_, ContactMessageListRow>(&sql);
        if let Some(filter) = filter {
            query = query.bind(filter.pattern().to_string());
        }
        let rows = query.fetch_all(&self.pool).await?;

        let total = match rows.first() {
            Some(row) => row.total,
            None => self.count(filter).await?,
        };

        let summaries = rows
            .into_iter()
            .map(|row| ContactMessageSummary {
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
                email_address: row.email_address,
                message: row.message,
                created_at: row.created_at,
            })
            .collect();

        Ok((summaries, total))
    }

    async fn count(&self, filter: Option<&SearchFilter>) -> Result<i64, RepositoryError> {
        let mut sql = String::from("SELECT COUNT(*) FROM contact_messages");
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(1));
        }

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(filter) = filter {
            query = query.bind(filter.pattern().to_string());
        }

        Ok(query.fetch_one(&self.pool).await?)
    }
}
