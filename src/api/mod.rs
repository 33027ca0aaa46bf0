//! Users API
//!
//! The `UserApi` port the controllers talk to, and its HTTP adapter.

pub mod endpoints;
pub mod http;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Credentials, PasswordChangeRequest, Project, RegistrationRequest};

pub use http::HttpUserApi;

/// One call per backend endpoint.
///
/// Implementations report a non-2xx response as `ApiError::Application` and
/// anything that prevents a response as `ApiError::Transport`. Success bodies
/// are ignored except for the project list.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError>;

    async fn projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn change_password(&self, request: &PasswordChangeRequest) -> Result<(), ApiError>;

    /// Sends no body.
    async fn logout(&self) -> Result<(), ApiError>;
}
