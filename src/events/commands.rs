//! Page events
//!
//! The typed replacement for DOM events: what a user did, on which page.

use std::fmt;

use crate::api::endpoints::{LOGIN_PAGE, PROFILE_PAGE, REGISTER_PAGE};
use crate::forms::FormField;

/// The three pages the client drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Profile,
}

impl Page {
    /// Maps a navigation target back to a page.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            LOGIN_PAGE => Some(Page::Login),
            REGISTER_PAGE => Some(Page::Register),
            PROFILE_PAGE => Some(Page::Profile),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => LOGIN_PAGE,
            Page::Register => REGISTER_PAGE,
            Page::Profile => PROFILE_PAGE,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Login => f.write_str("login"),
            Page::Register => f.write_str("register"),
            Page::Profile => f.write_str("profile"),
        }
    }
}

/// Something the user did on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    Load,
    /// A keystroke changed a field to `value`.
    Input { field: FormField, value: String },
    /// The page's form was submitted.
    Submit,
    /// The logout button was clicked.
    Logout,
}
