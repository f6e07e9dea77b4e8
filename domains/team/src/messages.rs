//! Response messages for the team domain

pub const DATA_CREATED: &str = "Data created successfully";
pub const DATA_UPDATED: &str = "Data updated successfully";
pub const DATA_DELETED: &str = "Data deleted successfully";
pub const DATA_FETCHED: &str = "Data fetched successfully";

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const DATA_NOT_FOUND: &str = "Data not found";
pub const INVALID_ID: &str = "Invalid ID provided";
