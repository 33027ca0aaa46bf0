//! Error handling
//!
//! Defines error types and how they surface to the user.

pub mod handlers;
pub mod types;

pub use types::*;
