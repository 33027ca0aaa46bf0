//! Test doubles for the users API and the page host.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::UserApi;
use crate::error::ApiError;
use crate::models::{Credentials, PasswordChangeRequest, Project, RegistrationRequest};
use crate::render::{Host, ProjectCard};

/// A call observed by `FakeUserApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login(Credentials),
    Register(RegistrationRequest),
    Projects,
    ChangePassword(PasswordChangeRequest),
    Logout,
}

/// Records calls and answers each endpoint with a scripted reply.
pub struct FakeUserApi {
    calls: Mutex<Vec<ApiCall>>,
    login: Result<(), ApiError>,
    register: Result<(), ApiError>,
    projects: Result<Vec<Project>, ApiError>,
    change_password: Result<(), ApiError>,
    logout: Result<(), ApiError>,
}

impl Default for FakeUserApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            login: Ok(()),
            register: Ok(()),
            projects: Ok(Vec::new()),
            change_password: Ok(()),
            logout: Ok(()),
        }
    }
}

impl FakeUserApi {
    pub fn with_login(mut self, reply: Result<(), ApiError>) -> Self {
        self.login = reply;
        self
    }

    pub fn with_register(mut self, reply: Result<(), ApiError>) -> Self {
        self.register = reply;
        self
    }

    pub fn with_projects(mut self, reply: Result<Vec<Project>, ApiError>) -> Self {
        self.projects = reply;
        self
    }

    pub fn with_change_password(mut self, reply: Result<(), ApiError>) -> Self {
        self.change_password = reply;
        self
    }

    pub fn with_logout(mut self, reply: Result<(), ApiError>) -> Self {
        self.logout = reply;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UserApi for FakeUserApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(ApiCall::Login(credentials.clone()));
        self.login.clone()
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        self.record(ApiCall::Register(request.clone()));
        self.register.clone()
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.record(ApiCall::Projects);
        self.projects.clone()
    }

    async fn change_password(&self, request: &PasswordChangeRequest) -> Result<(), ApiError> {
        self.record(ApiCall::ChangePassword(request.clone()));
        self.change_password.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(ApiCall::Logout);
        self.logout.clone()
    }
}

pub fn rejected(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Application {
        status,
        message: message.map(str::to_string),
    }
}

pub fn unreachable_server() -> ApiError {
    ApiError::Transport("connection refused".into())
}

/// Something the host was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Alert(String),
    Navigate(String),
    Reload,
    Projects(Vec<ProjectCard>),
    SubmitEnabled(bool),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.events.push(HostEvent::Alert(message.to_string()));
    }

    fn navigate(&mut self, target: &str) {
        self.events.push(HostEvent::Navigate(target.to_string()));
    }

    fn reload(&mut self) {
        self.events.push(HostEvent::Reload);
    }

    fn show_projects(&mut self, cards: &[ProjectCard]) {
        self.events.push(HostEvent::Projects(cards.to_vec()));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.events.push(HostEvent::SubmitEnabled(enabled));
    }
}
