//! Per-field rules and the aggregate "can submit" predicate.
//!
//! The same rules run on the client (blur validation, submit gating) and on
//! the server (re-validation of the incoming [`RegistrationRequest`]).
//! Lengths are measured in `char`s after trimming surrounding whitespace.

use thiserror::Error;

use crate::field::Field;
use crate::request::RegistrationRequest;

pub const MIN_USERNAME_CHARS: usize = 4;
pub const MIN_PASSWORD_CHARS: usize = 5;

pub fn email_is_valid(email: &str) -> bool {
    email.contains('@')
}

pub fn username_is_valid(username: &str) -> bool {
    username.trim().chars().count() >= MIN_USERNAME_CHARS
}

pub fn password_is_valid(password: &str) -> bool {
    password.trim().chars().count() >= MIN_PASSWORD_CHARS
}

/// The confirmation is trimmed, the password it is compared against is not.
pub fn passwords_match(confirm_password: &str, password: &str) -> bool {
    confirm_password.trim() == password
}

pub fn location_is_valid(location: &str) -> bool {
    !location.trim().is_empty()
}

/// Raw values of all five fields, borrowed from wherever they live.
#[derive(Clone, Copy, Debug)]
pub struct FormValues<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub location: &'a str,
}

impl FormValues<'_> {
    /// Evaluate the rule for a single field against these values.
    pub fn field_is_valid(&self, field: Field) -> bool {
        match field {
            Field::Email => email_is_valid(self.email),
            Field::Username => username_is_valid(self.username),
            Field::Password => password_is_valid(self.password),
            Field::ConfirmPassword => passwords_match(self.confirm_password, self.password),
            Field::Location => location_is_valid(self.location),
        }
    }
}

/// True iff every field rule holds for the raw values.
pub fn form_is_valid(values: &FormValues<'_>) -> bool {
    Field::ALL
        .into_iter()
        .all(|field| values.field_is_valid(field))
}

/// A request field that failed its rule on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .0.error_message())]
pub struct ValidationError(pub Field);

/// Re-check a submitted request.
///
/// The confirmation never leaves the client, so it is not part of this check.
pub fn validate_request(request: &RegistrationRequest) -> Result<(), ValidationError> {
    let values = FormValues {
        email: &request.email,
        username: &request.username,
        password: &request.password,
        confirm_password: &request.password,
        location: &request.location,
    };
    for field in [Field::Email, Field::Username, Field::Password, Field::Location] {
        if !values.field_is_valid(field) {
            return Err(ValidationError(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_values() -> FormValues<'static> {
        FormValues {
            email: "ada@example.com",
            username: "ada_l",
            password: "engine",
            confirm_password: "engine",
            location: "London",
        }
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert!(email_is_valid("a@b"));
        assert!(email_is_valid("@"));
        assert!(!email_is_valid("ada.example.com"));
        assert!(!email_is_valid(""));
    }

    #[test]
    fn test_username_length_is_trimmed() {
        assert!(username_is_valid("abcd"));
        assert!(!username_is_valid("abc"));
        assert!(!username_is_valid("  abc   "));
        assert!(username_is_valid(" ab cd "));
    }

    #[test]
    fn test_username_counts_chars_not_bytes() {
        assert!(!username_is_valid("äöü"));
        assert!(username_is_valid("äöüß"));
    }

    #[test]
    fn test_astral_characters_count_once() {
        // Two emoji are four UTF-16 units but only two chars.
        assert!(!username_is_valid("😀😀"));
        assert!(username_is_valid("😀😀😀😀"));
        assert!(!password_is_valid("😀😀😀😀"));
        assert!(password_is_valid("😀😀😀😀😀"));
    }

    #[test]
    fn test_password_length_is_trimmed() {
        assert!(password_is_valid("abcde"));
        assert!(!password_is_valid("abcd"));
        assert!(!password_is_valid(" abcd "));
    }

    #[test]
    fn test_confirmation_is_trimmed_but_password_is_not() {
        assert!(passwords_match("secret", "secret"));
        assert!(passwords_match("  secret ", "secret"));
        assert!(!passwords_match("secret", " secret"));
        assert!(!passwords_match("Secret", "secret"));
    }

    #[test]
    fn test_location_must_not_be_blank() {
        assert!(location_is_valid("Oslo"));
        assert!(!location_is_valid(""));
        assert!(!location_is_valid("   \t"));
    }

    #[test]
    fn test_form_valid_only_when_every_rule_holds() {
        assert!(form_is_valid(&valid_values()));

        let broken = [
            FormValues { email: "nope", ..valid_values() },
            FormValues { username: "abc", ..valid_values() },
            FormValues { password: "abcd", confirm_password: "abcd", ..valid_values() },
            FormValues { confirm_password: "engines", ..valid_values() },
            FormValues { location: " ", ..valid_values() },
        ];
        for values in broken {
            assert!(!form_is_valid(&values), "{values:?}");
        }
    }

    #[test]
    fn test_validate_request_reports_first_failing_field() {
        let mut request = RegistrationRequest {
            username: "ada_l".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine".to_string(),
            location: "London".to_string(),
            member_since: Utc::now(),
        };
        assert_eq!(validate_request(&request), Ok(()));

        request.username = "ab".to_string();
        request.location = String::new();
        let err = validate_request(&request).unwrap_err();
        assert_eq!(err, ValidationError(Field::Username));
        assert_eq!(err.to_string(), "Username should be more than 3 characters long.");
    }
}
