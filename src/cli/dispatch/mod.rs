//! Command-line argument dispatch.
//!
//! This module maps validated CLI arguments to the login action, resolving the
//! backend configuration from build-time defaults and runtime overrides.

use crate::cli::actions::{Action, login::Args};
use crate::cli::commands::{backend, credentials};
use crate::config::AppConfig;
use crate::login::LOGIN_PATH;
use anyhow::{Context, Result, anyhow};

/// Map validated CLI matches to a login action.
///
/// # Errors
/// Returns an error if the backend URL is missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = AppConfig::load().with_overrides(backend::Options::parse(matches).into());

    config
        .endpoint(LOGIN_PATH)
        .map_err(|err| anyhow!(err))
        .context("invalid BACKEND_URL")?;

    let credentials = credentials::Options::parse(matches);

    Ok(Action::Login(Args {
        config,
        email: credentials.email,
        password: credentials.password,
        print_response: credentials.print_response,
    }))
}
