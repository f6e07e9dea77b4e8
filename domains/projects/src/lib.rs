//! Projects domain: portfolio projects and their images

pub mod api;
pub mod domain;
pub mod messages;
pub mod repository;

pub use api::{routes, ProjectsState};
pub use domain::entities::{Project, ProjectSummary};
pub use repository::ProjectRepository;
