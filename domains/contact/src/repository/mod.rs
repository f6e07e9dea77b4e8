//! Repository implementations for the contact domain

mod contact_messages;

pub use contact_messages::ContactMessageRepository;
