//! HTTP handlers for the contact domain

pub mod contact_messages;
