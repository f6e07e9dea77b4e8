//! Repository implementations for the team domain

mod team_members;

pub use team_members::{TeamMemberPatch, TeamMemberRepository};
