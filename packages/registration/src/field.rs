//! The five registration fields and their per-field validity flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the inputs on the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Email,
    Username,
    Password,
    ConfirmPassword,
    Location,
}

impl Field {
    /// All fields in the order they are rendered.
    pub const ALL: [Field; 5] = [
        Field::Email,
        Field::Username,
        Field::Password,
        Field::ConfirmPassword,
        Field::Location,
    ];

    /// The `name` attribute of the matching `<input>`.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Username => "username",
            Field::Password => "password",
            Field::ConfirmPassword => "rePassword",
            Field::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email:",
            Field::Username => "Username:",
            Field::Password => "Password:",
            Field::ConfirmPassword => "Repeat Password:",
            Field::Location => "Location:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Username => "Username should be more than 3 characters long",
            Field::Password => "Password should be more than 4 characters long",
            Field::ConfirmPassword => "Repeat Password",
            Field::Location => "Location",
        }
    }

    /// HTML input type. Both password fields are masked.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Password | Field::ConfirmPassword => "password",
            _ => "text",
        }
    }

    /// Inline message shown under the field while it is invalid.
    pub fn error_message(self) -> &'static str {
        match self {
            Field::Email => "Email is not valid",
            Field::Username => "Username should be more than 3 characters long.",
            Field::Password => "Password should be more than 4 characters long.",
            Field::ConfirmPassword => "Passwords don't match.",
            Field::Location => "Location is required.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state validity of a single field.
///
/// Editing a field resets it to `Unknown`; only a blur moves it to
/// `Valid` or `Invalid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

impl Validity {
    pub fn is_invalid(self) -> bool {
        self == Validity::Invalid
    }
}

/// Current value and validity flag of one field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub validity: Validity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_input_name() {
        for field in Field::ALL {
            assert_eq!(field.to_string(), field.name());
        }
        assert_eq!(Field::ConfirmPassword.to_string(), "rePassword");
    }

    #[test]
    fn test_only_password_fields_are_masked() {
        assert_eq!(Field::Password.input_type(), "password");
        assert_eq!(Field::ConfirmPassword.input_type(), "password");
        assert_eq!(Field::Email.input_type(), "text");
        assert_eq!(Field::Location.input_type(), "text");
    }

    #[test]
    fn test_validity_from_bool() {
        assert_eq!(Validity::from(true), Validity::Valid);
        assert_eq!(Validity::from(false), Validity::Invalid);
        assert_eq!(Validity::default(), Validity::Unknown);
        assert!(!Validity::Unknown.is_invalid());
    }
}
