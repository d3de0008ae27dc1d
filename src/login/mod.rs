//! Login feature: credential validation, the request lifecycle, the HTTP call to
//! `/auth/login`, and the form controller that ties them together. This module
//! handles plain passwords and must never log them.
//!
//! Flow Overview: field edits update the controller; a submit validates both
//! fields, moves the request to pending, posts the credentials once, and settles
//! into success or error. Validation failures never reach the network.

pub mod client;
pub mod credentials;
pub mod errors;
pub mod form;
pub mod state;
pub mod types;
pub mod view;

pub use client::{AuthClient, LOGIN_PATH};
pub use credentials::{Credentials, Field, FieldErrors, validate};
pub use errors::{AuthError, LOGIN_FAILED};
pub use form::{LoginForm, SubmitError};
pub use state::{AlreadyPending, LOGIN_SUCCESSFUL, RequestState};
pub use types::AuthResponse;
pub use view::LoginView;
