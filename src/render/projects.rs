//! Project list rendering
//!
//! Turns API projects into cards: name, localised creation date and a link
//! to the project's detail page.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::endpoints::project_detail_path;
use crate::models::Project;

/// Year/month/day without padding, as a zh-CN locale prints dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%-m/%-d";
/// Rendered in place of a creation date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// One project as displayed on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub created_on: String,
    pub detail_href: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project, date_format: &str) -> Self {
        Self {
            name: project.name.clone(),
            created_on: localize_date(&project.created_at, date_format),
            detail_href: project_detail_path(project.id),
        }
    }
}

pub fn cards_from_projects(projects: &[Project], date_format: &str) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|project| ProjectCard::from_project(project, date_format))
        .collect()
}

/// Accepts RFC 3339 timestamps, naive timestamps and plain dates.
fn parse_created_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Formats the date part of `created_at` with a strftime pattern.
pub fn localize_date(raw: &str, date_format: &str) -> String {
    let Some(date) = parse_created_at(raw) else {
        return INVALID_DATE.to_string();
    };
    let mut rendered = String::new();
    // A bad pattern surfaces as fmt::Error here instead of a panic.
    if write!(rendered, "{}", date.format(date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    rendered
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for the `.project-list` container.
pub fn render_project_list(cards: &[ProjectCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                concat!(
                    "<div class=\"project-item\">\n",
                    "    <h4>{}</h4>\n",
                    "    <p>创建时间：{}</p>\n",
                    "    <a href=\"{}\" class=\"btn-view\">查看详情</a>\n",
                    "</div>\n"
                ),
                escape_html(&card.name),
                escape_html(&card.created_on),
                escape_html(&card.detail_href),
            )
        })
        .collect()
}
