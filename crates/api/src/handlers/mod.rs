//! HTTP handlers owned by the API composition crate

pub mod uploads;
