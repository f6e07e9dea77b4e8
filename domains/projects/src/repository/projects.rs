//! Project repository
//!
//! The list query pairs the keyword fragment and pagination stage built in
//! `stonegate-common` with a `COUNT(*) OVER ()` window so the page slice
//! and the pre-pagination total come from one statement snapshot.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use stonegate_common::{PageStage, RepositoryError, SearchFilter};
use uuid::Uuid;

use crate::domain::entities::{Project, ProjectSummary};

const PROJECT_COLUMNS: &str = "id, title, description, image, created_at, updated_at";

/// Partial update: only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectListRow {
    id: Uuid,
    title: String,
    description: String,
    image: String,
    created_at: DateTime<Utc>,
    total: i64,
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
        image: &str,
    ) -> Result<Project, RepositoryError> {
        let sql = format!(
            "INSERT INTO projects (title, description, image) \
             VALUES ($1, $2, $3) \
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(title)
            .bind(description)
            .bind(image)
            .fetch_one(&self.pool)
            .await?;

        Ok(project)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, RepositoryError> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    /// Fetch one page of (optionally filtered) projects plus the total
    /// count of matching rows before the page bounds were applied.
    pub async fn list(
        &self,
        filter: Option<&SearchFilter>,
        page: &PageStage,
    ) -> Result<(Vec<ProjectSummary>, i64), RepositoryError> {
        let mut sql = String::from(
            "SELECT id, title, description, image, created_at, COUNT(*) OVER () AS total \
             FROM projects",
        );
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(1));
        }
        sql.push(' ');
        sql.push_str(&page.to_sql());

        let mut query = sqlx::query_as::<_, ProjectListRow>(&sql);
        if let Some(filter) = filter {
            query = query.bind(filter.pattern().to_string());
        }
        let rows = query.fetch_all(&self.pool).await?;

        // A page past the end has no rows to carry the window count;
        // recover the total over the same filter.
        let total = match rows.first() {
            Some(row) => row.total,
            None => self.count(filter).await?,
        };

        let summaries = rows
            .into_iter()
            .map(|row| ProjectSummary {
                id: row.id,
                title: row.title,
                description: row.description,
                image: row.image,
                created_at: row.created_at,
            })
            .collect();

        Ok((summaries, total))
    }

    async fn count(&self, filter: Option<&SearchFilter>) -> Result<i64, RepositoryError> {
        let mut sql = String::from("SELECT COUNT(*) FROM projects");
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
        patch: &ProjectPatch,
    ) -> Result<Option<Project>, RepositoryError> {
        let sql = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                image = COALESCE($4, image), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .bind(patch.title.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.image.as_deref())
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    /// Delete and return the removed row so the caller can release its asset
    pub async fn delete(&self, id: Uuid) -> Result<Option<Project>, RepositoryError> {
        let sql = format!("DELETE FROM projects WHERE id = $1 RETURNING {PROJECT_COLUMNS}");
        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }
}
