//! Shared utilities: constants, error types, and time formatting.

pub mod constants;
pub mod error;
pub mod time;
