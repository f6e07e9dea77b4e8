//! Contact domain: contact-form messages and admin notifications

pub mod api;
pub mod domain;
pub mod messages;
pub mod repository;

pub use api::{routes, ContactState};
pub use domain::entities::{ContactMessage, ContactMessageSummary};
pub use repository::ContactMessageRepository;
