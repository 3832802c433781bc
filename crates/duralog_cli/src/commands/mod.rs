//! CLI command implementations.

pub mod append;
pub mod count;
pub mod verify;
