//! Project CRUD API handlers
//!
//! - POST /api/project - Create project (auth)
//! - GET /api/project - List with pagination & keyword search (public)
//! - GET /api/project/{id} - Get single project (public)
//! - PATCH /api/project/{id} - Partial update (auth)
//! - DELETE /api/project/{id} - Delete and release image (auth)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use stonegate_auth::AuthUser;
use stonegate_common::{
    query::{ListParams, PageStage, SearchFilter},
    response, Error, Result, ValidatedJson,
};

use crate::domain::entities::{ProjectSummary, SEARCH_FIELDS, SORTABLE_FIELDS};
use crate::messages;
use crate::repository::ProjectPatch;
use crate::ProjectsState;

/// Request for creating a project. Fields are optional at the type level
/// so absence and emptiness both produce the domain's own 400 message.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(max = 150))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub image: Option<String>,
}

/// Request for a partial project update
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(max = 150))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub image: Option<String>,
}

/// Response payload for the list endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectListResponse {
    projects: Vec<ProjectSummary>,
    total: i64,
    page: i64,
    per_page: i64,
}

#[derive(Debug, Serialize)]
struct IdResponse {
    #[serde(rename = "_id")]
    id: Uuid,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Path ids parse explicitly so a malformed id gets the domain's own 400
/// envelope instead of a bare rejection.
fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::Validation(messages::INVALID_ID.into()))
}

/// POST /api/project - Create project (auth)
pub async fn create_project(
    AuthUser(_claims): AuthUser,
    State(state): State<ProjectsState>,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
) -> Result<Response> {
    let title = non_empty(request.title);
    let description = non_empty(request.description);
    let image = non_empty(request.image);

    let (Some(title), Some(description), Some(image)) = (title, description, image) else {
        return Err(Error::Validation(messages::MISSING_REQUIRED_FIELDS.into()));
    };

    let project = state.projects.create(&title, &description, &image).await?;

    Ok(response::success(
        IdResponse { id: project.id },
        messages::DATA_CREATED,
        StatusCode::CREATED,
    ))
}

/// GET /api/project - List with pagination & keyword search (public)
pub async fn list_projects(
    State(state): State<ProjectsState>,
    Query(params): Query<ListParams>,
) -> Result<Response> {
    let filter = SearchFilter::new(params.keyword.as_deref(), SEARCH_FIELDS);
    let page = PageStage::new(&params, SORTABLE_FIELDS, "created_at");

    let (projects, total) = state.projects.list(filter.as_ref(), &page).await?;

    Ok(response::success(
        ProjectListResponse {
            projects,
            total,
            page: params.page(),
            per_page: params.per_page(),
        },
        messages::DATA_FETCHED,
        StatusCode::OK,
    ))
}

/// GET /api/project/{id} - Get single project (public)
pub async fn get_project(
    State(state): State<ProjectsState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    Ok(response::success(
        project,
        messages::DATA_FETCHED,
        StatusCode::OK,
    ))
}

/// PATCH /api/project/{id} - Partial update (auth)
///
/// When the patch replaces the image, the previously stored asset is
/// released after the row is updated.
pub async fn update_project(
    AuthUser(_claims): AuthUser,
    State(state): State<ProjectsState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateProjectRequest>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let existing = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    let patch = ProjectPatch {
        title: non_empty(request.title),
        description: non_empty(request.description),
        image: non_empty(request.image),
    };
    let new_image = patch.image.clone();

    let updated = state
        .projects
        .update(id, &patch)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    // Release the replaced asset only when a new one actually came in.
    if let Some(new_image) = new_image {
        if new_image != existing.image {
            state
                .storage
                .delete(&existing.image)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?;
        }
    }

    Ok(response::success(
        IdResponse { id: updated.id },
        messages::DATA_UPDATED,
        StatusCode::OK,
    ))
}

/// DELETE /api/project/{id} - Delete and release image (auth)
pub async fn delete_project(
    AuthUser(_claims): AuthUser,
    State(state): State<ProjectsState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let deleted = state
        .projects
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    state
        .storage
        .delete(&deleted.image)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;

    Ok(response::success(
        Value::Null,
        messages::DATA_DELETED,
        StatusCode::OK,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_length_limits() {
        let too_long = CreateProjectRequest {
            title: Some("t".repeat(151)),
            description: Some("d".to_string()),
            image: Some("k".to_string()),
        };
        assert!(too_long.validate().is_err());

        let ok = CreateProjectRequest {
            title: Some("Riverside Court".to_string()),
            description: Some("Mixed-use development".to_string()),
            image: Some("public/projects/images/k1.jpg".to_string()),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_non_empty_treats_empty_string_as_absent() {
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_id_response_wire_shape() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(IdResponse { id }).unwrap();
        assert_eq!(json["_id"], serde_json::json!(id.to_string()));
    }
}
