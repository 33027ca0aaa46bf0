//! Profile page controller
//!
//! Three independent behaviours: loading the project list, changing the
//! password and logging out. A failed project load is logged and never
//! alerted; the list just stays empty.

use std::sync::Arc;

use log::{error, info, warn};

use super::outcome::{Failure, FlowResult, Success, alert_for};
use crate::api::UserApi;
use crate::api::endpoints::LOGIN_PAGE;
use crate::error::FormError;
use crate::forms::{FormField, PasswordForm};
use crate::render::projects::cards_from_projects;

pub const NEW_PASSWORD_MISMATCH: &str = "新密码和确认密码不一致";
const PASSWORD_CHANGED: &str = "密码修改成功";
const PASSWORD_CHANGE_FAILED: &str = "密码修改失败";
const PASSWORD_CHANGE_CONTEXT: &str = "密码修改请求失败";
const LOGOUT_FAILED: &str = "退出登录失败";
const LOGOUT_CONTEXT: &str = "退出登录请求失败";
const PROJECTS_REJECTED_CONTEXT: &str = "获取项目数据失败";
const PROJECTS_TRANSPORT_CONTEXT: &str = "网络请求失败";

pub struct ProfileController {
    api: Arc<dyn UserApi>,
    password_form: PasswordForm,
    date_format: String,
}

impl ProfileController {
    pub fn new(api: Arc<dyn UserApi>, date_format: impl Into<String>) -> Self {
        Self {
            api,
            password_form: PasswordForm::default(),
            date_format: date_format.into(),
        }
    }

    /// Stores a keystroke in the change-password form. No live validation.
    pub fn on_input(&mut self, field: FormField, value: String) -> Result<(), FormError> {
        self.password_form.set(field, value)
    }

    /// Fetches the project list for rendering.
    pub async fn load_projects(&self) -> FlowResult {
        match self.api.projects().await {
            Ok(projects) => {
                info!("Loaded {} project(s)", projects.len());
                Ok(Success::show_projects(cards_from_projects(
                    &projects,
                    &self.date_format,
                )))
            }
            Err(err) => {
                let context = if err.is_transport() {
                    PROJECTS_TRANSPORT_CONTEXT
                } else {
                    PROJECTS_REJECTED_CONTEXT
                };
                error!("{}: {}", context, err);
                Err(Failure::Logged)
            }
        }
    }

    /// Sends the password change unless the new passwords differ.
    pub async fn on_change_password(&self) -> FlowResult {
        let request = self.password_form.change_request();
        if !request.passwords_match() {
            warn!("Password change aborted: {}", FormError::PasswordMismatch);
            return Err(Failure::Alert(NEW_PASSWORD_MISMATCH.to_string()));
        }

        match self.api.change_password(&request).await {
            Ok(()) => Ok(Success::notify_then_reload(PASSWORD_CHANGED)),
            Err(err) => Err(alert_for(
                PASSWORD_CHANGE_CONTEXT,
                &err,
                PASSWORD_CHANGE_FAILED,
            )),
        }
    }

    pub async fn on_logout(&self) -> FlowResult {
        match self.api.logout().await {
            Ok(()) => {
                info!("Logged out");
                Ok(Success::navigate(LOGIN_PAGE))
            }
            Err(err) => Err(alert_for(LOGOUT_CONTEXT, &err, LOGOUT_FAILED)),
        }
    }
}
