use clap::{Arg, ArgAction, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_PRINT_RESPONSE: &str = "print-response";

#[derive(Clone)]
pub struct Options {
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub print_response: bool,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            email: matches.get_one::<String>(ARG_EMAIL).cloned(),
            password: matches
                .get_one::<String>(ARG_PASSWORD)
                .map(|password| SecretString::from(password.clone())),
            print_response: matches.get_flag(ARG_PRINT_RESPONSE),
        }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("print_response", &self.print_response)
            .finish()
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Email address (prompted if not provided)")
                .env("SIGNIN_EMAIL"),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Password (prompted without echo if not provided)")
                .env("SIGNIN_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_PRINT_RESPONSE)
                .long(ARG_PRINT_RESPONSE)
                .help("Print the JSON response body after a successful sign-in")
                .action(ArgAction::SetTrue),
        )
}
