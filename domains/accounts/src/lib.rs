//! Accounts domain: admin users, signup/login, profile management

pub mod api;
pub mod domain;
pub mod messages;
pub mod repository;

pub use api::{routes, AccountsState};
pub use domain::entities::User;
pub use domain::password::{hash_password, verify_password};
pub use repository::UserRepository;
