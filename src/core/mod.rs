//! Configuration and data shared by the invitation flow

pub mod config;
pub mod models;
