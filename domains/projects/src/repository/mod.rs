//! Repository implementations for the projects domain

mod projects;

pub use projects::{ProjectPatch, ProjectRepository};
