//! HTTP handlers for the projects domain

pub mod projects;
