use crate::config::RuntimeConfig;
use clap::{Arg, ArgMatches, Command};

pub const ARG_BACKEND_URL: &str = "backend-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_PASSWORD_MIN_LENGTH: &str = "password-min-length";

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub backend_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub password_min_length: Option<usize>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            backend_url: matches.get_one::<String>(ARG_BACKEND_URL).cloned(),
            timeout_seconds: matches.get_one::<u64>(ARG_TIMEOUT).copied(),
            password_min_length: matches.get_one::<usize>(ARG_PASSWORD_MIN_LENGTH).copied(),
        }
    }
}

impl From<Options> for RuntimeConfig {
    fn from(options: Options) -> Self {
        Self {
            backend_url: options.backend_url,
            password_min_length: options.password_min_length,
            timeout_seconds: options.timeout_seconds,
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BACKEND_URL)
                .long(ARG_BACKEND_URL)
                .help("Backend base URL, example: https://api.example.com")
                .long_help(
                    "Backend base URL. Credentials are posted to <backend-url>/auth/login. Overrides the value baked in at build time.",
                )
                .env("BACKEND_URL"),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds, 0 disables it (default: 10)")
                .env("SIGNIN_TIMEOUT_SECONDS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_PASSWORD_MIN_LENGTH)
                .long(ARG_PASSWORD_MIN_LENGTH)
                .help("Minimum password length in characters (default: 6)")
                .env("SIGNIN_PASSWORD_MIN_LENGTH")
                .value_parser(clap::value_parser!(usize)),
        )
}
