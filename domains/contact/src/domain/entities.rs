//! Domain entities for the contact domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Maximum length of first and last names
pub const NAME_MAX: usize = 50;

/// Maximum length of the message body
pub const MESSAGE_MAX: usize = 1000;

/// Wire-name to column mapping for sortable list fields
pub const SORTABLE_FIELDS: &[(&str, &str)] = &[
    ("createdAt", "created_at"),
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("emailAddress", "email_address"),
];

/// Columns searched by the list endpoint's keyword filter, in order
pub const SEARCH_FIELDS: &[&str] = &["first_name", "last_name", "email_address", "message"];

/// A submitted contact-form message
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection of a contact message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
