//! Terminal command parsing
//!
//! One command per line. The keyword is case-insensitive; arguments are
//! whitespace-separated except for `SET`, whose value is the rest of the line.

use crate::events::{Page, PageEvent};
use crate::forms::FormField;

#[derive(Debug, PartialEq)]
pub enum Command {
    Open(Page),
    Set(FormField, String),
    Submit,
    Load,
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    ChangePassword {
        old_password: String,
        new_password: String,
        confirm_password: String,
    },
    Logout,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  OPEN login|register|profile     open a page
  SET <field> <value>             type into a field (username, email, password,
                                  confirmPassword, oldPassword, newPassword)
  SUBMIT                          submit the current page's form
  LOGIN <username> <password>
  REGISTER <username> <email> <password> <confirmPassword>
  PASSWD <old> <new> <confirm>    change password (opens the profile page)
  PROJECTS                        reload the project list (profile page)
  LOGOUT                          log out (profile page)
  HELP | QUIT";

fn parse_page(name: &str) -> Option<Page> {
    match name.to_ascii_lowercase().as_str() {
        "login" => Some(Page::Login),
        "register" => Some(Page::Register),
        "profile" => Some(Page::Profile),
        _ => None,
    }
}

// Parse a raw line into a Command
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();
    let args: Vec<&str> = arg.split_whitespace().collect();

    let unknown = || Command::Unknown(trimmed.to_string());

    match (cmd.as_str(), args.as_slice()) {
        ("OPEN", [page]) => parse_page(page).map_or_else(unknown, Command::Open),
        ("SET", [field, ..]) => {
            let value = arg[field.len()..].trim_start();
            FormField::from_name(field)
                .map_or_else(unknown, |field| Command::Set(field, value.to_string()))
        }
        ("SUBMIT", []) => Command::Submit,
        ("PROJECTS" | "LOAD", []) => Command::Load,
        ("LOGIN", [username, password]) => Command::Login {
            username: username.to_string(),
            password: password.to_string(),
        },
        ("REGISTER", [username, email, password, confirm_password]) => Command::Register {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        },
        ("PASSWD", [old_password, new_password, confirm_password]) => Command::ChangePassword {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        },
        ("LOGOUT", []) => Command::Logout,
        ("HELP" | "?", []) => Command::Help,
        ("QUIT" | "Q" | "EXIT", []) => Command::Quit,
        _ => unknown(),
    }
}

fn input(field: FormField, value: String) -> PageEvent {
    PageEvent::Input { field, value }
}

impl Command {
    /// Page a shortcut implies, opened first when it isn't current.
    pub fn target_page(&self) -> Option<Page> {
        match self {
            Command::Open(page) => Some(*page),
            Command::Login { .. } => Some(Page::Login),
            Command::Register { .. } => Some(Page::Register),
            Command::ChangePassword { .. } => Some(Page::Profile),
            _ => None,
        }
    }

    /// Page events the command stands for, in order.
    pub fn into_events(self) -> Vec<PageEvent> {
        match self {
            Command::Set(field, value) => vec![input(field, value)],
            Command::Submit => vec![PageEvent::Submit],
            Command::Load => vec![PageEvent::Load],
            Command::Login { username, password } => vec![
                input(FormField::Username, username),
                input(FormField::Password, password),
                PageEvent::Submit,
            ],
            Command::Register {
                username,
                email,
                password,
                confirm_password,
            } => vec![
                input(FormField::Username, username),
                input(FormField::Email, email),
                input(FormField::Password, password),
                input(FormField::ConfirmPassword, confirm_password),
                PageEvent::Submit,
            ],
            Command::ChangePassword {
                old_password,
                new_password,
                confirm_password,
            } => vec![
                input(FormField::OldPassword, old_password),
                input(FormField::NewPassword, new_password),
                input(FormField::ConfirmPassword, confirm_password),
                PageEvent::Submit,
            ],
            Command::Logout => vec![PageEvent::Logout],
            Command::Open(_) | Command::Help | Command::Quit | Command::Unknown(_) => Vec::new(),
        }
    }
}
