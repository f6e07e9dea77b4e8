//! Team member repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use stonegate_common::{PageStage, RepositoryError, SearchFilter};
use uuid::Uuid;

use crate::domain::entities::{TeamMember, TeamMemberSummary};

const MEMBER_COLUMNS: &str = "id, name, role, description, image, created_at, updated_at";

/// Partial update: only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct TeamMemberListRow {
    id: Uuid,
    name: String,
    role: String,
    description: String,
    image: String,
    created_at: DateTime<Utc>,
    total: i64,
}

#[derive(Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        role: &str,
        description: &str,
        image: &str,
    ) -> Result<TeamMember, RepositoryError> {
        let sql = format!(
            "INSERT INTO team_members (name, role, description, image) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MEMBER_COLUMNS}"
        );
        let member = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(name)
            .bind(role)
            .bind(description)
            .bind(image)
            .fetch_one(&self.pool)
            .await?;

        Ok(member)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamMember>, RepositoryError> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = $1");
        let member = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(member)
    }

    /// Fetch one page of (optionally filtered) team members plus the
    /// pre-pagination total, from a single statement snapshot.
    pub async fn list(
        &self,
        filter: Option<&SearchFilter>,
        page: &PageStage,
    ) -> Result<(Vec<TeamMemberSummary>, i64), RepositoryError> {
        let mut sql = String::from(
            "SELECT id, name, role, description, image, created_at, COUNT(*) OVER () AS total \
             FROM team_members",
        );
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(1));
        }
        sql.push(' ');
        sql.push_str(&page.to_sql());

        let mut query = sqlx::query_as::<_, TeamMemberListRow>(&sql);
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
            .map(|row| TeamMemberSummary {
                id: row.id,
                name: row.name,
                role: row.role,
                description: row.description,
                image: row.image,
                created_at: row.created_at,
            })
            .collect();

        Ok((summaries, total))
    }

    async fn count(&self, filter: Option<&SearchFilter>) -> Result<i64, RepositoryError> {
        let mut sql = String::from("SELECT COUNT(*) FROM team_members");
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

    /// Apply a partial update; absent fields keep their value
    pub async fn update(
        &self,
        id: Uuid,
        patch: &TeamMemberPatch,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        let sql = format!(
            "UPDATE team_members SET \
                name = COALESCE($2, name), \
                role = COALESCE($3, role), \
                description = COALESCE($4, description), \
                image = COALESCE($5, image), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {MEMBER_COLUMNS}"
        );
        let member = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.role.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.image.as_deref())
            .fetch_optional(&self.pool)
            .await?;

        Ok(member)
    }

    /// Delete and return the removed row so the caller can release its asset
    pub async fn delete(&self, id: Uuid) -> Result<Option<TeamMember>, RepositoryError> {
        let sql = format!("DELETE FROM team_members WHERE id = $1 RETURNING {MEMBER_COLUMNS}");
        let member = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(member)
    }
}
