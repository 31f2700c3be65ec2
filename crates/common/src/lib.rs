//! Shared building blocks for the service crates: logging setup and small wire types.

pub mod types;
pub mod utils;
