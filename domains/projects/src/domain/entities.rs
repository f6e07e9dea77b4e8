//! Domain entities for the projects domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Maximum length of a project title
pub const TITLE_MAX: usize = 150;

/// Maximum length of a project description
pub const DESCRIPTION_MAX: usize = 2000;

/// Wire-name to column mapping for sortable list fields
pub const SORTABLE_FIELDS: &[(&str, &str)] = &[
    ("createdAt", "created_at"),
    ("title", "title"),
    ("description", "description"),
];

/// Columns searched by the list endpoint's keyword filter, in order
pub const SEARCH_FIELDS: &[&str] = &["title", "description"];

/// Portfolio project entity
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Storage key of the uploaded project image
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection of a project (the fields the list endpoint exposes)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_wire_format() {
        let project = Project {
            id: Uuid::new_v4(),
            title: "Riverside Court".to_string(),
            description: "Mixed-use development".to_string(),
            image: "public/projects/images/k1.jpg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["image"], "public/projects/images/k1.jpg");
    }
}
