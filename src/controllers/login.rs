//! Login page controller

use std::sync::Arc;

use log::info;

use super::outcome::{FlowResult, Success, alert_for};
use crate::api::UserApi;
use crate::api::endpoints::PROFILE_PAGE;
use crate::error::FormError;
use crate::forms::{FormField, LoginForm, LoginValidity};

const LOGIN_FAILED: &str = "登录失败，请检查用户名和密码";
const LOGIN_CONTEXT: &str = "登录请求失败";

pub struct LoginController {
    api: Arc<dyn UserApi>,
    form: LoginForm,
}

impl LoginController {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            form: LoginForm::default(),
        }
    }

    /// Stores a keystroke and recomputes whether submit is enabled.
    pub fn on_input(&mut self, field: FormField, value: String) -> Result<LoginValidity, FormError> {
        self.form.set(field, value)?;
        Ok(self.form.validity())
    }

    pub fn validity(&self) -> LoginValidity {
        self.form.validity()
    }

    /// Sends the current credentials. Runs even when the form is invalid.
    pub async fn on_submit(&self) -> FlowResult {
        let credentials = self.form.credentials();
        match self.api.login(&credentials).await {
            Ok(()) => {
                info!("Login accepted for {}", credentials.username);
                Ok(Success::navigate(PROFILE_PAGE))
            }
            Err(err) => Err(alert_for(LOGIN_CONTEXT, &err, LOGIN_FAILED)),
        }
    }
}
