//! Response messages for the accounts domain

pub const USER_REGISTERED: &str = "User registered successfully";
pub const USER_LOGGED_IN: &str = "User logged in successfully";
pub const USER_DETAILS_FETCHED: &str = "User details fetched successfully";
pub const PROFILE_UPDATED: &str = "Profile updated successfully";
pub const PASSWORD_UPDATED: &str = "Password updated successfully";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const USER_NOT_FOUND: &str = "User not found";
pub const DUPLICATE_EMAIL: &str = "Email address already in use";
