//! Utility modules
//!
//! Shared helpers that don't belong to a single layer.

pub mod logging;
