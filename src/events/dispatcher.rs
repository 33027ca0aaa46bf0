//! Event dispatcher
//!
//! Routes page events to the handler of the controller that owns the current
//! page.

use std::sync::Arc;

use log::debug;

use super::commands::{Page, PageEvent};
use crate::api::UserApi;
use crate::controllers::{FlowResult, LoginController, ProfileController, RegisterController};

/// What a dispatched event produced, for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// New enabled state of the submit control.
    Validity(bool),
    Flow(FlowResult),
    /// Stored without anything to render.
    Recorded,
    /// The current page has no handler for the event.
    Ignored(String),
}

pub struct Dispatcher {
    api: Arc<dyn UserApi>,
    date_format: String,
    page: Page,
    login: LoginController,
    register: RegisterController,
    profile: ProfileController,
}

impl Dispatcher {
    /// Starts on the login page.
    pub fn new(api: Arc<dyn UserApi>, date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        Self {
            login: LoginController::new(Arc::clone(&api)),
            register: RegisterController::new(Arc::clone(&api)),
            profile: ProfileController::new(Arc::clone(&api), date_format.clone()),
            api,
            date_format,
            page: Page::Login,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switches to `page` with fresh form state, as a page load would.
    pub fn open(&mut self, page: Page) {
        debug!("Opening {} page", page);
        match page {
            Page::Login => self.login = LoginController::new(Arc::clone(&self.api)),
            Page::Register => self.register = RegisterController::new(Arc::clone(&self.api)),
            Page::Profile => {
                self.profile = ProfileController::new(Arc::clone(&self.api), self.date_format.clone())
            }
        }
        self.page = page;
    }

    /// Opens the page behind a navigation target, if it is one of ours.
    pub fn follow(&mut self, target: &str) -> Option<Page> {
        let page = Page::from_path(target)?;
        self.open(page);
        Some(page)
    }

    pub async fn dispatch(&mut self, event: PageEvent) -> Dispatched {
        match (self.page, event) {
            (Page::Login, PageEvent::Input { field, value }) => {
                match self.login.on_input(field, value) {
                    Ok(validity) => Dispatched::Validity(validity.submit_enabled()),
                    Err(e) => Dispatched::Ignored(e.to_string()),
                }
            }
            (Page::Login, PageEvent::Submit) => Dispatched::Flow(self.login.on_submit().await),
            (Page::Register, PageEvent::Input { field, value }) => {
                match self.register.on_input(field, value) {
                    Ok(validity) => Dispatched::Validity(validity.submit_enabled()),
                    Err(e) => Dispatched::Ignored(e.to_string()),
                }
            }
            (Page::Register, PageEvent::Submit) => {
                Dispatched::Flow(self.register.on_submit().await)
            }
            (Page::Profile, PageEvent::Load) => Dispatched::Flow(self.profile.load_projects().await),
            (Page::Profile, PageEvent::Input { field, value }) => {
                match self.profile.on_input(field, value) {
                    Ok(()) => Dispatched::Recorded,
                    Err(e) => Dispatched::Ignored(e.to_string()),
                }
            }
            (Page::Profile, PageEvent::Submit) => {
                Dispatched::Flow(self.profile.on_change_password().await)
            }
            (Page::Profile, PageEvent::Logout) => Dispatched::Flow(self.profile.on_logout().await),
            (Page::Login | Page::Register, PageEvent::Load) => Dispatched::Recorded,
            (page, PageEvent::Logout) => {
                Dispatched::Ignored(format!("no logout button on the {} page", page))
            }
        }
    }
}
