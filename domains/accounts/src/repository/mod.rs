//! Repository implementations for the accounts domain

mod users;

pub use users::UserRepository;
