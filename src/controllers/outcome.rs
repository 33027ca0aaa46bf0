//! Flow outcome types
//!
//! Every submit or click handler resolves to a `FlowResult`: what to do next
//! on success, or how the failure surfaces.

use log::warn;

use crate::error::ApiError;
use crate::error::handlers::user_message;
use crate::render::ProjectCard;
use crate::utils::logging::log_api_failure;

/// What the host should do after a successful flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(String),
    Reload,
    ShowProjects(Vec<ProjectCard>),
}

/// Successful end of a flow, with an optional notice shown before the effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    pub notice: Option<String>,
    pub effect: Effect,
}

impl Success {
    pub fn navigate(target: &str) -> Self {
        Self {
            notice: None,
            effect: Effect::Navigate(target.to_string()),
        }
    }

    pub fn notify_then_navigate(notice: &str, target: &str) -> Self {
        Self {
            notice: Some(notice.to_string()),
            effect: Effect::Navigate(target.to_string()),
        }
    }

    pub fn notify_then_reload(notice: &str) -> Self {
        Self {
            notice: Some(notice.to_string()),
            effect: Effect::Reload,
        }
    }

    pub fn show_projects(cards: Vec<ProjectCard>) -> Self {
        Self {
            notice: None,
            effect: Effect::ShowProjects(cards),
        }
    }
}

/// How a failed flow surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Shown to the user.
    Alert(String),
    /// Already logged; nothing is shown.
    Logged,
}

pub type FlowResult = Result<Success, Failure>;

/// Logs an API failure and builds the alert for it.
pub(crate) fn alert_for(context: &str, err: &ApiError, fallback: &str) -> Failure {
    if err.is_transport() {
        log_api_failure(context, err);
    } else {
        warn!("{}: {}", context, err);
    }
    Failure::Alert(user_message(err, fallback))
}
