//! Reqwest-backed users API adapter.
//!
//! Owns transport details only: URL building, JSON bodies, the session
//! cookie jar and mapping of HTTP statuses to `ApiError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;

use super::UserApi;
use super::endpoints;
use crate::error::ApiError;
use crate::models::{Credentials, ErrorBody, PasswordChangeRequest, Project, RegistrationRequest};
use crate::utils::logging::log_request;

/// Talks to the users API rooted at one base URL.
pub struct HttpUserApi {
    client: Client,
    base_url: Url,
}

impl HttpUserApi {
    /// Builds an adapter with a request timeout and a cookie store, so the
    /// session set by login is sent on later calls.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|error| ApiError::Transport(format!("invalid URL for {path}: {error}")))
    }

    fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<RequestBuilder, ApiError> {
        log_request("POST", path);
        Ok(self.client.post(self.url(path)?).json(body))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // An unreadable error body just means there is no server message.
        let body = response.bytes().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message);
    ApiError::Application {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        Self::send(self.post_json(endpoints::LOGIN, credentials)?).await?;
        Ok(())
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        Self::send(self.post_json(endpoints::REGISTER, request)?).await?;
        Ok(())
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        log_request("GET", endpoints::PROJECTS);
        let request = self.client.get(self.url(endpoints::PROJECTS)?);
        let response = Self::send(request).await?;
        response
            .json::<Vec<Project>>()
            .await
            .map_err(|error| ApiError::Transport(format!("invalid project list: {error}")))
    }

    async fn change_password(&self, request: &PasswordChangeRequest) -> Result<(), ApiError> {
        Self::send(self.post_json(endpoints::CHANGE_PASSWORD, request)?).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        log_request("POST", endpoints::LOGOUT);
        let request = self.client.post(self.url(endpoints::LOGOUT)?);
        Self::send(request).await?;
        Ok(())
    }
}
