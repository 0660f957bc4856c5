//! CLI command implementations.

pub mod list;
pub mod platform;
pub mod resolve;
