//! # Signin (login form controller)
//!
//! `signin` collects an email/password pair, validates it against static rules,
//! and submits it once to `{BACKEND_URL}/auth/login`.
//!
//! ## Form Controller
//!
//! [`login::LoginForm`] owns the field values, one error slot per field, and the
//! request lifecycle ([`login::RequestState`]). Validation is a pure function
//! ([`login::validate`]) so it can be exercised without a network.
//!
//! - **Validation:** the email must match an address grammar and the password must
//!   reach the configured minimum length. Both fields are reported at once.
//! - **Submission:** one `POST` with a JSON body. A 2xx response is passed through
//!   untouched; anything else surfaces the body's `message` or `"Login failed"`.
//! - **Single flight:** a form that is already pending refuses another submit.
//!
//! ## Command Line
//!
//! The `signin` binary drives the controller from a terminal and renders the
//! form with [`login::LoginView`]. Passwords are held in
//! [`secrecy::SecretString`] and are never logged.

pub mod cli;
pub mod config;
pub mod login;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
