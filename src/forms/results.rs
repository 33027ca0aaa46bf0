//! Validation result types
//!
//! Per-field outcomes returned by the validators.

/// Result of validating the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginValidity {
    pub username_valid: bool,
    pub password_valid: bool,
}

impl LoginValidity {
    pub fn submit_enabled(&self) -> bool {
        self.username_valid && self.password_valid
    }
}

/// Result of validating the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterValidity {
    pub username_valid: bool,
    pub email_valid: bool,
    pub password_valid: bool,
    pub confirm_password_valid: bool,
}

impl RegisterValidity {
    pub fn submit_enabled(&self) -> bool {
        self.username_valid && self.email_valid && self.password_valid && self.confirm_password_valid
    }
}
