//! Request and response payloads for the login endpoint. The request carries the
//! plain password, so it must never be logged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful login response, passed through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthResponse(Value);

impl AuthResponse {
    #[must_use]
    pub const fn new(body: Value) -> Self {
        Self(body)
    }

    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_body(self) -> Value {
        self.0
    }
}

/// Error body shape; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}
