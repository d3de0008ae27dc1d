//! Login form controller. It owns the field values, one error slot per field,
//! and the request state, replacing declarative form bindings with plain
//! methods that can be driven from a terminal, a UI layer, or a test.

use super::{
    AuthClient, AuthError, AuthResponse, Credentials, Field, FieldErrors, LoginView, RequestState,
    credentials::{check_email, check_password, validate},
};
use crate::config::AppConfig;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use tracing::{debug, info, instrument};

/// Why a submit did not start a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(FieldErrors),
    AlreadyPending,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => write!(formatter, "{errors}"),
            SubmitError::AlreadyPending => write!(formatter, "A sign-in request is already in progress"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug)]
pub struct LoginForm {
    client: AuthClient,
    password_min_length: usize,
    email: String,
    password: SecretString,
    errors: FieldErrors,
    submitted: bool,
    state: RequestState,
}

impl LoginForm {
    /// Creates an empty form bound to the configured backend.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the backend URL is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        Ok(Self::with_client(
            AuthClient::new(config)?,
            config.password_min_length,
        ))
    }

    #[must_use]
    pub fn with_client(client: AuthClient, password_min_length: usize) -> Self {
        Self {
            client,
            password_min_length,
            email: String::new(),
            password: SecretString::default(),
            errors: FieldErrors::default(),
            submitted: false,
            state: RequestState::Idle,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    #[must_use]
    pub const fn password_min_length(&self) -> usize {
        self.password_min_length
    }

    /// Updates the email; after the first submit attempt the field is re-checked.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        if self.submitted {
            self.errors.email = check_email(&self.email);
        }
    }

    /// Updates the password; after the first submit attempt the field is re-checked.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = SecretString::from(value.into());
        if self.submitted {
            self.errors.password = check_password(&self.password, self.password_min_length);
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Validates both fields and stores the resulting messages.
    ///
    /// # Errors
    /// Returns the field messages when either field is invalid.
    pub fn validate(&mut self) -> Result<Credentials, FieldErrors> {
        let result = validate(&self.credentials(), self.password_min_length);
        self.errors = result.as_ref().err().cloned().unwrap_or_default();
        result
    }

    /// Validates and moves the request to pending, returning the credentials to send.
    ///
    /// # Errors
    /// Returns `AlreadyPending` while a request is in flight, or `Invalid` when
    /// validation fails; in both cases the request state is left untouched.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitError> {
        if self.state.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }

        self.submitted = true;
        let credentials = self.validate().map_err(|errors| {
            let fields: Vec<&str> = errors.failed().map(Field::name).collect();
            debug!(fields = %fields.join(","), "login form invalid");
            SubmitError::Invalid(errors)
        })?;

        self.state
            .begin()
            .map_err(|_| SubmitError::AlreadyPending)?;

        Ok(credentials)
    }

    /// Settles the pending request. Returns `false` if nothing was pending.
    pub fn complete(&mut self, outcome: Result<AuthResponse, AuthError>) -> bool {
        match &outcome {
            Ok(_) => info!("login succeeded"),
            Err(err) => info!(status = ?err.status(), "login failed: {err}"),
        }
        self.state.resolve(outcome)
    }

    /// Runs one full submission: validate, post, settle.
    ///
    /// # Errors
    /// Returns `SubmitError` when no request was sent. Network and server errors
    /// are not errors here; they settle the state into `RequestState::Error`.
    #[instrument(level = "debug", skip_all)]
    pub async fn submit(&mut self) -> Result<&RequestState, SubmitError> {
        let credentials = self.begin_submit()?;
        Ok(self.send(&credentials).await)
    }

    /// Posts credentials returned by `begin_submit` and settles the state.
    ///
    /// This is the second half of `submit`, for callers that show the pending
    /// view between the two steps.
    pub async fn send(&mut self, credentials: &Credentials) -> &RequestState {
        debug!(email = %credentials.email, "submitting login");
        let outcome = self.client.submit(credentials).await;
        self.complete(outcome);

        &self.state
    }

    /// Clears values, messages, and the request state.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password = SecretString::default();
        self.errors = FieldErrors::default();
        self.submitted = false;
        self.state.reset();
    }

    #[must_use]
    pub fn view(&self) -> LoginView {
        LoginView::build(
            &self.email,
            self.password.expose_secret().chars().count(),
            &self.errors,
            &self.state,
        )
    }
}
