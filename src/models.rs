//! Request and response payloads exchanged with the users API.
//!
//! Field names follow the JSON the backend expects, so request types rename
//! to camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Login form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form payload.
///
/// `password` and `confirm_password` must match before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRequest {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

/// Change-password form payload.
///
/// `new_password` and `confirm_password` must match before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeRequest {
    pub fn passwords_match(&self) -> bool {
        self.new_password == self.confirm_password
    }
}

/// A user-owned project as listed by the API. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// Shape of an error body. Only `message` is read.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
