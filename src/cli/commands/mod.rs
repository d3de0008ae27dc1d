pub mod backend;
pub mod credentials;
pub mod logging;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("signin")
        .about("Sign in with email and password")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles);

    let command = backend::with_args(command);
    let command = credentials::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_ENV: [(&str, Option<&str>); 7] = [
        ("BACKEND_URL", None),
        ("SIGNIN_EMAIL", None),
        ("SIGNIN_PASSWORD", None),
        ("SIGNIN_TIMEOUT_SECONDS", None),
        ("SIGNIN_PASSWORD_MIN_LENGTH", None),
        ("SIGNIN_LOG_LEVEL", None),
        ("SIGNIN_LOG_FORMAT", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "signin");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Sign in with email and password".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(CLEAR_ENV, || {
            let matches = new().get_matches_from(vec![
                "signin",
                "--backend-url",
                "https://api.example.com",
                "--email",
                "you@example.com",
                "--password",
                "hunter22",
                "--timeout",
                "5",
                "--password-min-length",
                "8",
                "--print-response",
            ]);

            assert_eq!(
                matches
                    .get_one::<String>(backend::ARG_BACKEND_URL)
                    .map(String::as_str),
                Some("https://api.example.com")
            );
            assert_eq!(
                matches
                    .get_one::<String>(credentials::ARG_EMAIL)
                    .map(String::as_str),
                Some("you@example.com")
            );
            assert_eq!(
                matches
                    .get_one::<String>(credentials::ARG_PASSWORD)
                    .map(String::as_str),
                Some("hunter22")
            );
            assert_eq!(matches.get_one::<u64>(backend::ARG_TIMEOUT).copied(), Some(5));
            assert_eq!(
                matches
                    .get_one::<usize>(backend::ARG_PASSWORD_MIN_LENGTH)
                    .copied(),
                Some(8)
            );
            assert!(matches.get_flag(credentials::ARG_PRINT_RESPONSE));
        });
    }

    #[test]
    fn test_defaults_without_args() {
        temp_env::with_vars(CLEAR_ENV, || {
            let matches = new().get_matches_from(vec!["signin"]);

            assert_eq!(matches.get_one::<String>(backend::ARG_BACKEND_URL), None);
            assert_eq!(matches.get_one::<String>(credentials::ARG_EMAIL), None);
            assert_eq!(matches.get_one::<u64>(backend::ARG_TIMEOUT), None);
            assert!(!matches.get_flag(credentials::ARG_PRINT_RESPONSE));
            assert_eq!(
                matches
                    .get_one::<String>(logging::ARG_LOG_FORMAT)
                    .map(String::as_str),
                Some("text")
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("BACKEND_URL", Some("http://localhost:3000")),
                ("SIGNIN_EMAIL", Some("you@example.com")),
                ("SIGNIN_PASSWORD", Some("hunter22")),
                ("SIGNIN_TIMEOUT_SECONDS", Some("0")),
                ("SIGNIN_PASSWORD_MIN_LENGTH", Some("3")),
                ("SIGNIN_LOG_LEVEL", Some("info")),
                ("SIGNIN_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["signin"]);
                assert_eq!(
                    matches
                        .get_one::<String>(backend::ARG_BACKEND_URL)
                        .map(String::as_str),
                    Some("http://localhost:3000")
                );
                assert_eq!(
                    matches
                        .get_one::<String>(credentials::ARG_PASSWORD)
                        .map(String::as_str),
                    Some("hunter22")
                );
                assert_eq!(matches.get_one::<u64>(backend::ARG_TIMEOUT).copied(), Some(0));
                assert_eq!(
                    matches
                        .get_one::<usize>(backend::ARG_PASSWORD_MIN_LENGTH)
                        .copied(),
                    Some(3)
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(
                    matches
                        .get_one::<String>(logging::ARG_LOG_FORMAT)
                        .map(String::as_str),
                    Some("json")
                );
            },
        );
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        temp_env::with_vars(CLEAR_ENV, || {
            let result = new().try_get_matches_from(vec!["signin", "--log-format", "xml"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SIGNIN_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["signin"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("SIGNIN_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["signin".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }
}
