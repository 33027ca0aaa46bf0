//! Page event handling
//!
//! Typed page events and the dispatcher that hands them to controllers.

pub mod commands;
pub mod dispatcher;

pub use commands::{Page, PageEvent};
pub use dispatcher::{Dispatched, Dispatcher};
