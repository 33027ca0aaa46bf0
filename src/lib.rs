//! Landscape Lab client
//!
//! Form handling for the login, registration and profile pages of the
//! Landscape Lab web application, independent of the page host.

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod events;
pub mod forms;
pub mod models;
pub mod render;
pub mod terminal;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use api::{HttpUserApi, UserApi};
pub use events::{Dispatcher, Page, PageEvent};
