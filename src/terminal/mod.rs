//! Terminal host
//!
//! Drives the pages from line commands on stdin and prints their effects.

pub mod host;
pub mod parser;
pub mod session;

pub use host::{ConsoleHost, OutputStyle};
pub use session::run_session;
