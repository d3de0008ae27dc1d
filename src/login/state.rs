//! Request lifecycle for one login form. Transitions are explicit so every
//! state the UI can show is a variant here rather than a combination of flags.

use super::{AuthError, AuthResponse};
use tracing::{debug, warn};

pub const LOGIN_SUCCESSFUL: &str = "Login successful!";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Success(AuthResponse),
    Error(String),
}

/// A submission was started while another one was still in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyPending;

impl RequestState {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Success(_) => "success",
            RequestState::Error(_) => "error",
        }
    }

    /// Error region text, present only in `Error`.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Success region text, present only in `Success`.
    #[must_use]
    pub const fn success_message(&self) -> Option<&'static str> {
        match self {
            RequestState::Success(_) => Some(LOGIN_SUCCESSFUL),
            _ => None,
        }
    }

    /// Moves to `Pending` from any settled state.
    ///
    /// # Errors
    /// Returns `AlreadyPending` if a request is still in flight.
    pub fn begin(&mut self) -> Result<(), AlreadyPending> {
        if self.is_pending() {
            return Err(AlreadyPending);
        }

        debug!(from = self.label(), "login request pending");
        *self = RequestState::Pending;

        Ok(())
    }

    /// Settles a pending request. Outcomes arriving in any other state are
    /// dropped, and the method returns `false`.
    pub fn resolve(&mut self, outcome: Result<AuthResponse, AuthError>) -> bool {
        if !self.is_pending() {
            warn!(state = self.label(), "ignoring login outcome without a pending request");
            return false;
        }

        *self = match outcome {
            Ok(response) => RequestState::Success(response),
            Err(err) => RequestState::Error(err.message()),
        };
        debug!(to = self.label(), "login request settled");

        true
    }

    pub fn reset(&mut self) {
        *self = RequestState::Idle;
    }
}
