//! Form handling
//!
//! Field state for the login, registration and change-password forms, and the
//! validators that decide whether their submit controls are enabled.

pub mod results;
pub mod state;
pub mod validator;

pub use results::{LoginValidity, RegisterValidity};
pub use state::{FormField, LoginForm, PasswordForm, RegisterForm};
pub use validator::{is_valid_email, validate_login, validate_registration};
