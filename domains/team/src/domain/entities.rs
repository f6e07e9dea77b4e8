//! Domain entities for the team domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Maximum length of a team member name and role
pub const NAME_MAX: usize = 100;
pub const ROLE_MAX: usize = 100;

/// Maximum length of a team member description
pub const DESCRIPTION_MAX: usize = 2000;

/// Wire-name to column mapping for sortable list fields
pub const SORTABLE_FIELDS: &[(&str, &str)] = &[
    ("createdAt", "created_at"),
    ("name", "name"),
    ("role", "role"),
];

/// Columns searched by the list endpoint's keyword filter, in order
pub const SEARCH_FIELDS: &[&str] = &["name", "role", "description"];

/// Team member entity
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub description: String,
    /// Storage key of the uploaded portrait
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection of a team member
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_member_wire_format() {
        let member = TeamMember {
            id: Uuid::new_v4(),
            name: "Dana Reyes".to_string(),
            role: "Lead Architect".to_string(),
            description: "Heads the design studio".to_string(),
            image: "public/teams/images/k2.jpg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["role"], "Lead Architect");
    }
}
