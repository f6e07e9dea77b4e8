//! Team member CRUD API handlers
//!
//! - POST /api/team - Create team member (auth)
//! - GET /api/team - List with pagination & keyword search (public)
//! - GET /api/team/{id} - Get single team member (public)
//! - PATCH /api/team/{id} - Partial update (auth)
//! - DELETE /api/team/{id} - Delete and release image (auth)

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

use crate::domain::entities::{TeamMemberSummary, SEARCH_FIELDS, SORTABLE_FIELDS};
use crate::messages;
use crate::repository::TeamMemberPatch;
use crate::TeamState;

/// Request for creating a team member
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub role: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub image: Option<String>,
}

/// Request for a partial team member update
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub role: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub image: Option<String>,
}

/// Response payload for the list endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamMemberListResponse {
    team_members: Vec<TeamMemberSummary>,
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

/// POST /api/team - Create team member (auth)
pub async fn create_team_member(
    AuthUser(_claims): AuthUser,
    State(state): State<TeamState>,
    ValidatedJson(request): ValidatedJson<CreateTeamMemberRequest>,
) -> Result<Response> {
    let name = non_empty(request.name);
    let role = non_empty(request.role);
    let description = non_empty(request.description);
    let image = non_empty(request.image);

    let (Some(name), Some(role), Some(description), Some(image)) =
        (name, role, description, image)
    else {
        return Err(Error::Validation(messages::MISSING_REQUIRED_FIELDS.into()));
    };

    let member = state
        .members
        .create(&name, &role, &description, &image)
        .await?;

    Ok(response::success(
        IdResponse { id: member.id },
        messages::DATA_CREATED,
        StatusCode::CREATED,
    ))
}

/// GET /api/team - List with pagination & keyword search (public)
pub async fn list_team_members(
    State(state): State<TeamState>,
    Query(params): Query<ListParams>,
) -> Result<Response> {
    let filter = SearchFilter::new(params.keyword.as_deref(), SEARCH_FIELDS);
    let page = PageStage::new(&params, SORTABLE_FIELDS, "created_at");

    let (team_members, total) = state.members.list(filter.as_ref(), &page).await?;

    Ok(response::success(
        TeamMemberListResponse {
            team_members,
            total,
            page: params.page(),
            per_page: params.per_page(),
        },
        messages::DATA_FETCHED,
        StatusCode::OK,
    ))
}

/// GET /api/team/{id} - Get single team member (public)
pub async fn get_team_member(
    State(state): State<TeamState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    Ok(response::success(
        member,
        messages::DATA_FETCHED,
        StatusCode::OK,
    ))
}

/// PATCH /api/team/{id} - Partial update (auth)
///
/// When the patch replaces the image, the previously stored asset is
/// released after the row is updated.
pub async fn update_team_member(
    AuthUser(_claims): AuthUser,
    State(state): State<TeamState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTeamMemberRequest>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let existing = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    let patch = TeamMemberPatch {
        name: non_empty(request.name),
        role: non_empty(request.role),
        description: non_empty(request.description),
        image: non_empty(request.image),
    };
    let new_image = patch.image.clone();

    let updated = state
        .members
        .update(id, &patch)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

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

/// DELETE /api/team/{id} - Delete and release image (auth)
pub async fn delete_team_member(
    AuthUser(_claims): AuthUser,
    State(state): State<TeamState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let deleted = state
        .members
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
