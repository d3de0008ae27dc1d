//! Render-ready snapshot of the login form. Building a view never touches the
//! controller, and the password value is only ever shown masked.

use super::{FieldErrors, RequestState};
use std::fmt;

pub const TITLE: &str = "Sign in to your account";
pub const SIGN_IN: &str = "Sign In";
pub const SIGNING_IN: &str = "Signing In...";
pub const FORGOT_PASSWORD: &str = "Forgot your password?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    /// Browser autofill hint.
    pub autocomplete: &'static str,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginView {
    pub title: &'static str,
    pub email: FieldView,
    pub password: FieldView,
    pub submit: ButtonView,
    pub error: Option<String>,
    pub success: Option<&'static str>,
    pub forgot_password: LinkView,
}

impl LoginView {
    #[must_use]
    pub fn build(
        email: &str,
        password_len: usize,
        errors: &FieldErrors,
        state: &RequestState,
    ) -> Self {
        let pending = state.is_pending();

        Self {
            title: TITLE,
            email: FieldView {
                label: "Email Address",
                input_type: "email",
                placeholder: "you@example.com",
                autocomplete: "email",
                value: email.to_string(),
                error: errors.email.clone(),
            },
            password: FieldView {
                label: "Password",
                input_type: "password",
                placeholder: "Enter your password",
                autocomplete: "current-password",
                value: "*".repeat(password_len),
                error: errors.password.clone(),
            },
            submit: ButtonView {
                label: if pending { SIGNING_IN } else { SIGN_IN },
                disabled: pending,
            },
            error: state.error_message().map(ToString::to_string),
            success: state.success_message(),
            // Placeholder target until password recovery exists.
            forgot_password: LinkView {
                label: FORGOT_PASSWORD,
                href: "#",
            },
        }
    }
}

impl fmt::Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        if self.value.is_empty() {
            writeln!(f, "  [ {} ]", self.placeholder)?;
        } else {
            writeln!(f, "  [ {} ]", self.value)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LoginView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        write!(f, "{}", self.email)?;
        write!(f, "{}", self.password)?;
        writeln!(f)?;
        if self.submit.disabled {
            writeln!(f, "[ {} ] (disabled)", self.submit.label)?;
        } else {
            writeln!(f, "[ {} ]", self.submit.label)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "{error}")?;
        }
        if let Some(success) = self.success {
            writeln!(f, "{success}")?;
        }
        writeln!(f)?;
        write!(f, "{} ({})", self.forgot_password.label, self.forgot_password.href)
    }
}
