//! Core configuration and task types

pub mod config;
pub mod models;
