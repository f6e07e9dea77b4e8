//! Response messages for the contact domain

pub const CONTACT_MESSAGE_CREATED: &str = "Contact message submitted successfully";
pub const DATA_FETCHED: &str = "Data fetched successfully";

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const DATA_NOT_FOUND: &str = "Data not found";
pub const INVALID_ID: &str = "Invalid ID provided";
