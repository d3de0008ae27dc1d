//! Backend endpoint and form policy configuration. The backend base URL can be
//! baked in at build time through `BACKEND_URL` and overridden at run time by the
//! command line or environment, so one binary can target several deployments.
//! Configuration values are public; do not store secrets here.

use crate::login::AuthError;
use std::time::Duration;
use url::Url;

/// Minimum password length used when nothing else is configured.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
/// Request timeout (seconds) used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Resolved configuration for one login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub password_min_length: usize,
    /// `None` disables the request timeout.
    pub timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
        }
    }
}

impl AppConfig {
    /// Loads defaults, taking the backend URL from the build environment when set.
    #[must_use]
    pub fn load() -> Self {
        let backend_url = option_env!("BACKEND_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_default();

        Self {
            backend_url,
            ..Self::default()
        }
    }

    /// Applies runtime overrides; blank values keep the current setting.
    #[must_use]
    pub fn with_overrides(mut self, runtime: RuntimeConfig) -> Self {
        apply_runtime_overrides(&mut self, runtime);
        self
    }

    /// Builds an absolute endpoint URL under the configured backend.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the backend URL is missing, unparsable, or
    /// not `http`/`https`.
    pub fn endpoint(&self, path: &str) -> Result<String, AuthError> {
        let base = self.backend_url.trim();
        if base.is_empty() {
            return Err(AuthError::Config(
                "Backend URL is not configured (set BACKEND_URL)".to_string(),
            ));
        }

        let url = Url::parse(base)
            .map_err(|err| AuthError::Config(format!("Invalid backend URL '{base}': {err}")))?;

        match url.scheme() {
            "http" | "https" => Ok(build_url_with_base(base, path)),
            scheme => Err(AuthError::Config(format!(
                "Unsupported backend URL scheme: {scheme}"
            ))),
        }
    }
}

/// Values supplied at run time (flags or environment). Strings are normalized
/// before they are applied.
#[derive(Debug, Default)]
pub struct RuntimeConfig {
    pub backend_url: Option<String>,
    pub password_min_length: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime
        .backend_url
        .as_deref()
        .and_then(normalize_runtime_value)
    {
        config.backend_url = value;
    }
    if let Some(value) = runtime.password_min_length {
        config.password_min_length = value;
    }
    if let Some(seconds) = runtime.timeout_seconds {
        config.timeout = (seconds > 0).then(|| Duration::from_secs(seconds));
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Joins a base URL and a path with exactly one slash between them.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    format!("{}/{}", base, path.trim_start_matches('/'))
}
