//! Users API routes
//!
//! Paths of the backend endpoints and of the pages the client navigates to.

pub const LOGIN: &str = "/api/users/login";
pub const REGISTER: &str = "/api/users/register";
pub const PROJECTS: &str = "/api/users/projects";
pub const CHANGE_PASSWORD: &str = "/api/users/change-password";
pub const LOGOUT: &str = "/api/users/logout";

/// Page served after a successful login.
pub const PROFILE_PAGE: &str = "/api/users/profile";
/// Page served after registration or logout.
pub const LOGIN_PAGE: &str = "/api/users/login";
pub const REGISTER_PAGE: &str = "/api/users/register";

/// Detail page of a single project.
pub fn project_detail_path(id: i64) -> String {
    format!("/projects/{}", id)
}
