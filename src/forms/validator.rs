//! Form field validation
//!
//! Advisory checks that drive the submit control. They never block a submit
//! on their own.

use regex::Regex;
use std::sync::LazyLock;

use super::results::{LoginValidity, RegisterValidity};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

// Deliberately loose: one run without whitespace or '@', '@', a run, '.', a run.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN)
        .unwrap_or_else(|error| panic!("email pattern failed to compile: {error}"))
});

/// Length in UTF-16 code units, the way a browser measures a field value.
fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn is_valid_username(username: &str) -> bool {
    field_len(username) >= MIN_USERNAME_LENGTH
}

pub fn is_valid_password(password: &str) -> bool {
    field_len(password) >= MIN_PASSWORD_LENGTH
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates the login form fields.
pub fn validate_login(username: &str, password: &str) -> LoginValidity {
    LoginValidity {
        username_valid: is_valid_username(username),
        password_valid: is_valid_password(password),
    }
}

/// Validates the four registration fields.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> RegisterValidity {
    RegisterValidity {
        username_valid: is_valid_username(username),
        email_valid: is_valid_email(email),
        password_valid: is_valid_password(password),
        confirm_password_valid: password == confirm_password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_enabled_only_when_both_hold() {
        assert!(validate_login("bob", "longenough").submit_enabled());
        assert!(!validate_login("bo", "longenough").submit_enabled());
        assert!(!validate_login("bob", "short").submit_enabled());
        assert!(!validate_login("", "").submit_enabled());
    }

    #[test]
    fn test_login_boundaries() {
        for (username, password) in [("abc", "12345678"), ("abcd", "123456789")] {
            assert!(validate_login(username, password).submit_enabled());
        }
        assert!(!validate_login("ab", "12345678").submit_enabled());
        assert!(!validate_login("abc", "1234567").submit_enabled());
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        assert!(is_valid_username("张小明"));
        assert!(!is_valid_username("张明"));
        assert!(is_valid_password("密码密码密码密码"));
        assert!(!is_valid_password("密码密码密码密"));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        assert!(is_valid_username("a😀"));
        assert!(!is_valid_username("😀"));
        assert!(is_valid_password("😀😀😀😀"));
        assert!(!is_valid_password("😀😀😀"));
        assert!(is_valid_password("😀😀😀ab"));
        assert!(!is_valid_password("😀😀😀a"));
    }

    #[test]
    fn test_email_pattern_is_loose() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("bob@example.co.uk"));
        assert!(is_valid_email("weird!#$@x.y"));
        assert!(!is_valid_email("bob@example"));
        assert!(!is_valid_email("bob example@x.com"));
        assert!(!is_valid_email("bob@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("bob@example."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_registration_needs_all_four() {
        let ok = validate_registration("bob", "bob@example.com", "longenough1", "longenough1");
        assert!(ok.submit_enabled());

        let cases = [
            ("bo", "bob@example.com", "longenough1", "longenough1"),
            ("bob", "bob.example.com", "longenough1", "longenough1"),
            ("bob", "bob@example.com", "short", "short"),
            ("bob", "bob@example.com", "longenough1", "longenough2"),
        ];
        for (username, email, password, confirm) in cases {
            let validity = validate_registration(username, email, password, confirm);
            assert!(!validity.submit_enabled(), "{username} {email} {password} {confirm}");
        }
    }

    #[test]
    fn test_registration_reports_each_predicate() {
        let validity = validate_registration("bo", "nope", "short", "other");
        assert!(!validity.username_valid);
        assert!(!validity.email_valid);
        assert!(!validity.password_valid);
        assert!(!validity.confirm_password_valid);
    }
}
