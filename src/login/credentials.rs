//! Login credentials and their field-level validation. Validation is a pure
//! function over the submitted values; the form controller decides when to run it.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::{fmt, sync::OnceLock};

pub const INVALID_EMAIL: &str = "Enter a valid email";

// Local part may not start with a dot or contain "..", checked separately.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// The email/password pair submitted for authentication.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Per-field validation messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: Option<String>) {
        match field {
            Field::Email => self.email = message,
            Field::Password => self.password = message,
        }
    }

    /// Fields that failed, in form order.
    pub fn failed(&self) -> impl Iterator<Item = Field> + '_ {
        [Field::Email, Field::Password]
            .into_iter()
            .filter(|field| self.get(*field).is_some())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in self.failed() {
            if !first {
                writeln!(formatter)?;
            }
            first = false;
            write!(
                formatter,
                "{}: {}",
                field.name(),
                self.get(field).unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Message shown when the password is shorter than `min_length`.
#[must_use]
pub fn password_message(min_length: usize) -> String {
    format!("Password must be at least {min_length} characters")
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Checks one email value, returning the field message on failure.
#[must_use]
pub fn check_email(email: &str) -> Option<String> {
    (!valid_email(email)).then(|| INVALID_EMAIL.to_string())
}

/// Checks one password value against the minimum length in characters.
#[must_use]
pub fn check_password(password: &SecretString, min_length: usize) -> Option<String> {
    (password.expose_secret().chars().count() < min_length)
        .then(|| password_message(min_length))
}

/// Validates both fields and returns the accepted credentials, or every field
/// message that applies. There are no cross-field rules.
///
/// # Errors
/// Returns `FieldErrors` when either field fails its rule.
pub fn validate(input: &Credentials, password_min_length: usize) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        email: check_email(&input.email),
        password: check_password(&input.password, password_min_length),
    };

    if errors.is_empty() {
        Ok(input.clone())
    } else {
        Err(errors)
    }
}
