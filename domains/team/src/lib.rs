//! Team domain: team member profiles and their images

pub mod api;
pub mod domain;
pub mod messages;
pub mod repository;

pub use api::{routes, TeamState};
pub use domain::entities::{TeamMember, TeamMemberSummary};
pub use repository::TeamMemberRepository;
