//! Shared services for xtask commands.

pub mod context;
pub mod error;
pub mod fs;
