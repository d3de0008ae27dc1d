//! HTTP client for the login endpoint. It sends exactly one request per call and
//! turns every failure into an `AuthError` carrying user-facing text. The
//! password is exposed only while the request body is serialized.

use super::{
    AuthError, AuthResponse, Credentials, LOGIN_FAILED,
    types::{ErrorBody, LoginRequest},
};
use crate::{APP_USER_AGENT, config::AppConfig};
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{Instrument, debug, info_span};
use ulid::Ulid;

pub const LOGIN_PATH: &str = "/auth/login";
/// Maximum number of server message characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct AuthClient {
    client: Client,
    login_url: String,
}

impl AuthClient {
    /// Builds a client for `{backend_url}/auth/login`.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the backend URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let login_url = config.endpoint(LOGIN_PATH)?;

        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AuthError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client, login_url })
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Posts the credentials as JSON and passes a 2xx body through.
    ///
    /// # Errors
    /// Returns `AuthError::Rejected` with the body's `message` (or `"Login failed"`)
    /// on a non-2xx status, `Timeout`/`Network` when the server cannot be reached,
    /// and `Parse` when a 2xx body is not JSON.
    pub async fn submit(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let request_id = Ulid::new().to_string();
        let payload = LoginRequest {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        };

        let span = info_span!(
            "auth.login",
            http.method = "POST",
            url = %self.login_url,
            request_id = %request_id
        );

        let response = self
            .client
            .post(&self.login_url)
            .header("X-Request-Id", request_id.as_str())
            .json(&payload)
            .send()
            .instrument(span.clone())
            .await
            .map_err(map_request_error)?;

        handle_login_response(response).instrument(span).await
    }
}

/// Maps transport errors into user-facing variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AuthError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_login_response(response: Response) -> Result<AuthResponse, AuthError> {
    let status = response.status();
    let body = response.text().await.map_err(map_request_error)?;

    debug!(status = status.as_u16(), "login response received");

    if status.is_success() {
        parse_success_body(&body)
    } else {
        Err(AuthError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

fn parse_success_body(body: &str) -> Result<AuthResponse, AuthError> {
    if body.trim().is_empty() {
        return Ok(AuthResponse::default());
    }

    serde_json::from_str::<Value>(body)
        .map(AuthResponse::new)
        .map_err(|err| AuthError::Parse(format!("Failed to decode response: {err}")))
}

/// Extracts the `message` string from an error body, falling back to
/// `"Login failed"` when it is missing, blank, not a string, or not JSON.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .and_then(|message| message.as_str().and_then(sanitize_message))
        .unwrap_or_else(|| LOGIN_FAILED.to_string())
}

/// Makes server text safe for a terminal: whitespace runs (newlines included)
/// collapse to one space and other control characters, such as ANSI escapes,
/// are dropped.
fn sanitize_message(message: &str) -> Option<String> {
    let printable: String = message
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();
    let collapsed = printable.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
