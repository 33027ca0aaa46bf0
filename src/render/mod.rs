//! Rendering layer
//!
//! The only place that turns controller outcomes into host effects. A host is
//! whatever shows the page: a browser bridge, the terminal, a test double.

pub mod projects;

use log::{debug, info};

use crate::controllers::{Effect, Failure};
use crate::events::Dispatched;

pub use projects::{ProjectCard, render_project_list};

/// Side effects a page can ask of its host.
pub trait Host {
    /// Blocking, user-visible notification.
    fn alert(&mut self, message: &str);

    fn navigate(&mut self, target: &str);

    fn reload(&mut self);

    fn show_projects(&mut self, cards: &[ProjectCard]);

    fn set_submit_enabled(&mut self, enabled: bool);
}

/// Applies one dispatch result to the host.
pub fn apply<H: Host + ?Sized>(host: &mut H, dispatched: Dispatched) {
    match dispatched {
        Dispatched::Validity(enabled) => host.set_submit_enabled(enabled),
        Dispatched::Flow(Ok(success)) => {
            if let Some(notice) = &success.notice {
                host.alert(notice);
            }
            match success.effect {
                Effect::Navigate(target) => {
                    info!("Navigating to {}", target);
                    host.navigate(&target);
                }
                Effect::Reload => host.reload(),
                Effect::ShowProjects(cards) => host.show_projects(&cards),
            }
        }
        Dispatched::Flow(Err(Failure::Alert(message))) => host.alert(&message),
        Dispatched::Flow(Err(Failure::Logged)) | Dispatched::Recorded => {}
        Dispatched::Ignored(reason) => debug!("Event ignored: {}", reason),
    }
}
