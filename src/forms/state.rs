//! Form state
//!
//! Holds the current field values of each form. Values are owned by the
//! controller that renders the form and are read when it submits.

use std::fmt;

use crate::error::FormError;
use crate::models::{Credentials, PasswordChangeRequest, RegistrationRequest};

use super::results::{LoginValidity, RegisterValidity};
use super::validator::{validate_login, validate_registration};

/// An input field, named as in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
    ConfirmPassword,
    OldPassword,
    NewPassword,
}

impl FormField {
    /// Looks a field up by its markup name (`confirmPassword`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(FormField::Username),
            "email" => Some(FormField::Email),
            "password" => Some(FormField::Password),
            "confirmPassword" => Some(FormField::ConfirmPassword),
            "oldPassword" => Some(FormField::OldPassword),
            "newPassword" => Some(FormField::NewPassword),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
            FormField::OldPassword => "oldPassword",
            FormField::NewPassword => "newPassword",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn unknown_field(form: &'static str, field: FormField) -> FormError {
    FormError::UnknownField {
        form,
        field: field.name().to_string(),
    }
}

/// Fields of the login form.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl LoginForm {
    pub fn set(&mut self, field: FormField, value: String) -> Result<(), FormError> {
        match field {
            FormField::Username => self.username = value,
            FormField::Password => self.password = value,
            other => return Err(unknown_field("login", other)),
        }
        Ok(())
    }

    pub fn validity(&self) -> LoginValidity {
        validate_login(&self.username, &self.password)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Fields of the registration form.
#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl RegisterForm {
    pub fn set(&mut self, field: FormField, value: String) -> Result<(), FormError> {
        match field {
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
            other => return Err(unknown_field("register", other)),
        }
        Ok(())
    }

    pub fn validity(&self) -> RegisterValidity {
        validate_registration(
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        )
    }

    pub fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

/// Fields of the change-password form on the profile page.
#[derive(Debug, Default, Clone)]
pub struct PasswordForm {
    old_password: String,
    new_password: String,
    confirm_password: String,
}

impl PasswordForm {
    pub fn set(&mut self, field: FormField, value: String) -> Result<(), FormError> {
        match field {
            FormField::OldPassword => self.old_password = value,
            FormField::NewPassword => self.new_password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
            other => return Err(unknown_field("change-password", other)),
        }
        Ok(())
    }

    pub fn change_request(&self) -> PasswordChangeRequest {
        PasswordChangeRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}
