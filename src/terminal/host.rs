//! Console host
//!
//! Prints what a browser would show: alerts, navigation, the project list and
//! the state of the submit control. Navigation and reload requests are kept
//! until the session picks them up.

use std::io::Write;

use serde::Deserialize;

use crate::render::{Host, ProjectCard, render_project_list};

/// How the project list is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Text,
    Html,
}

pub struct ConsoleHost<W: Write> {
    out: W,
    style: OutputStyle,
    submit_enabled: bool,
    pending_navigation: Option<String>,
    reload_requested: bool,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W, style: OutputStyle) -> Self {
        Self {
            out,
            style,
            submit_enabled: false,
            pending_navigation: None,
            reload_requested: false,
        }
    }

    /// Prints an informational line that isn't a page effect.
    pub fn note(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn take_navigation(&mut self) -> Option<String> {
        self.pending_navigation.take()
    }

    pub fn take_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.out, "[alert] {}", message);
    }

    fn navigate(&mut self, target: &str) {
        let _ = writeln!(self.out, "[navigate] {}", target);
        self.pending_navigation = Some(target.to_string());
    }

    fn reload(&mut self) {
        let _ = writeln!(self.out, "[reload]");
        self.reload_requested = true;
    }

    fn show_projects(&mut self, cards: &[ProjectCard]) {
        match self.style {
            OutputStyle::Html => {
                let _ = write!(self.out, "{}", render_project_list(cards));
            }
            OutputStyle::Text => {
                if cards.is_empty() {
                    let _ = writeln!(self.out, "(no projects)");
                }
                for card in cards {
                    let _ = writeln!(
                        self.out,
                        "- {}  创建时间：{}  {}",
                        card.name, card.created_on, card.detail_href
                    );
                }
            }
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if enabled != self.submit_enabled {
            let state = if enabled { "enabled" } else { "disabled" };
            let _ = writeln!(self.out, "[submit {}]", state);
        }
        self.submit_enabled = enabled;
    }
}
