//! Utility functions

pub mod links;
