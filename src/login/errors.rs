//! Submission errors and the user-facing text each one renders as.

use std::fmt;

/// Fallback message when the server gives no usable reason.
pub const LOGIN_FAILED: &str = "Login failed";

/// Submission-tier errors. Each variant carries the text shown below the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    Config(String),
    Network(String),
    Timeout(String),
    Rejected { status: u16, message: String },
    Parse(String),
}

impl AuthError {
    /// The message surfaced in the form's error region.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status for server rejections.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Config(message) => write!(formatter, "Config error: {message}"),
            AuthError::Network(message) | AuthError::Timeout(message) => {
                write!(formatter, "{message}")
            }
            AuthError::Rejected { message, .. } => write!(formatter, "{message}"),
            AuthError::Parse(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}
