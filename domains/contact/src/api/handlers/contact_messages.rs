//! Contact message API handlers
//!
//! - POST /api/contact - Submit the contact form (public)
//! - GET /api/contact - List with pagination & keyword search (auth)
//! - GET /api/contact/{id} - Get single message (auth)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stonegate_auth::AuthUser;
use stonegate_common::{
    query::{ListParams, PageStage, SearchFilter},
    response, Error, Result, ValidatedJson,
};
use stonegate_email::ContactNotification;

use crate::domain::entities::{ContactMessageSummary, SEARCH_FIELDS, SORTABLE_FIELDS};
use crate::messages;
use crate::ContactState;

/// Request for submitting the contact form
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessageRequest {
    #[validate(length(max = 50))]
    pub first_name: Option<String>,

    #[validate(length(max = 50))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email_address: Option<String>,

    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

/// Response payload for the list endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactMessageListResponse {
    contact_messages: Vec<ContactMessageSummary>,
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

/// POST /api/contact - Submit the contact form (public)
///
/// The message is persisted first; a failure to notify the admin by mail
/// is logged, not surfaced, since the submission itself succeeded.
pub async fn create_contact_message(
    State(state): State<ContactState>,
    ValidatedJson(request): ValidatedJson<CreateContactMessageRequest>,
) -> Result<Response> {
    let first_name = non_empty(request.first_name);
    let last_name = non_empty(request.last_name);
    let email_address = non_empty(request.email_address);
    let message = non_empty(request.message);

    let (Some(first_name), Some(last_name), Some(email_address), Some(message)) =
        (first_name, last_name, email_address, message)
    else {
        return Err(Error::Validation(messages::MISSING_REQUIRED_FIELDS.into()));
    };

    let contact_message = state
        .contact_messages
        .create(&first_name, &last_name, &email_address, &message)
        .await?;

    let notification = ContactNotification {
        first_name: contact_message.first_name.clone(),
        last_name: contact_message.last_name.clone(),
        email_address: contact_message.email_address.clone(),
        message: contact_message.message.clone(),
        submitted_at: contact_message.created_at,
    };
    if let Err(e) = state.email.send_contact_notification(&notification).await {
        tracing::error!(error = %e, contact_message_id = %contact_message.id,
            "failed to send contact notification email");
    }

    Ok(response::success(
        IdResponse {
            id: contact_message.id,
        },
        messages::CONTACT_MESSAGE_CREATED,
        StatusCode::CREATED,
    ))
}

/// GET /api/contact - List with pagination & keyword search (auth)
pub async fn list_contact_messages(
    AuthUser(_claims): AuthUser,
    State(state): State<ContactState>,
    Query(params): Query<ListParams>,
) -> Result<Response> {
    let filter = SearchFilter::new(params.keyword.as_deref(), SEARCH_FIELDS);
    let page = PageStage::new(&params, SORTABLE_FIELDS, "created_at");

    let (contact_messages, total) = state.contact_messages.list(filter.as_ref(), &page).await?;

    Ok(response::success(
        ContactMessageListResponse {
            contact_messages,
            total,
            page: params.page(),
            per_page: params.per_page(),
        },
        messages::DATA_FETCHED,
        StatusCode::OK,
    ))
}

/// GET /api/contact/{id} - Get single message (auth)
pub async fn get_contact_message(
    AuthUser(_claims): AuthUser,
    State(state): State<ContactState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let contact_message = state
        .contact_messages
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(messages::DATA_NOT_FOUND.into()))?;

    Ok(response::success(
        contact_message,
        messages::DATA_FETCHED,
        StatusCode::OK,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validates_email() {
        let bad = CreateContactMessageRequest {
            first_name: Some("Jordan".to_string()),
            last_name: Some("Lee".to_string()),
            email_address: Some("not-an-email".to_string()),
            message: Some("Hello".to_string()),
        };
        assert!(bad.validate().is_err());

        let ok = CreateContactMessageRequest {
            first_name: Some("Jordan".to_string()),
            last_name: Some("Lee".to_string()),
            email_address: Some("jordan@example.com".to_string()),
            message: Some("Hello".to_string()),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_list_response_wire_shape() {
        let response = ContactMessageListResponse {
            contact_messages: vec![],
            total: 0,
            page: 1,
            per_page: 10,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("contactMessages").is_some());
        assert!(json.get("perPage").is_some());
    }
}
