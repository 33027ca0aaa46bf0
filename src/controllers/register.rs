//! Registration page controller

use std::sync::Arc;

use log::{info, warn};

use super::outcome::{Failure, FlowResult, Success, alert_for};
use crate::api::UserApi;
use crate::api::endpoints::LOGIN_PAGE;
use crate::error::FormError;
use crate::forms::{FormField, RegisterForm, RegisterValidity};

pub const PASSWORD_MISMATCH: &str = "两次输入的密码不一致";
const REGISTER_SUCCEEDED: &str = "注册成功，请登录";
const REGISTER_FAILED: &str = "注册失败，请检查输入信息";
const REGISTER_CONTEXT: &str = "注册请求失败";

pub struct RegisterController {
    api: Arc<dyn UserApi>,
    form: RegisterForm,
}

impl RegisterController {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            form: RegisterForm::default(),
        }
    }

    /// Stores a keystroke and recomputes all four predicates.
    pub fn on_input(
        &mut self,
        field: FormField,
        value: String,
    ) -> Result<RegisterValidity, FormError> {
        self.form.set(field, value)?;
        Ok(self.form.validity())
    }

    pub fn validity(&self) -> RegisterValidity {
        self.form.validity()
    }

    /// Sends the registration unless the two passwords differ.
    pub async fn on_submit(&self) -> FlowResult {
        let request = self.form.registration_request();
        if !request.passwords_match() {
            warn!("Registration aborted: {}", FormError::PasswordMismatch);
            return Err(Failure::Alert(PASSWORD_MISMATCH.to_string()));
        }

        match self.api.register(&request).await {
            Ok(()) => {
                info!("Registered {}", request.username);
                Ok(Success::notify_then_navigate(REGISTER_SUCCEEDED, LOGIN_PAGE))
            }
            Err(err) => Err(alert_for(REGISTER_CONTEXT, &err, REGISTER_FAILED)),
        }
    }
}
