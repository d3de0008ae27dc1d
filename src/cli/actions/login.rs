use crate::config::AppConfig;
use crate::login::{Field, LoginForm, RequestState, SubmitError};
use anyhow::{Context, Result, anyhow, bail};
use dialoguer::{Confirm, Input, Password};
use secrecy::{ExposeSecret, SecretString};
use std::io::IsTerminal;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub print_response: bool,
}

/// Which fields were left for the terminal to fill in.
#[derive(Clone, Copy, Debug)]
struct Prompts {
    email: bool,
    password: bool,
}

impl Prompts {
    const fn any(self) -> bool {
        self.email || self.password
    }
}

/// Execute the login action.
///
/// Values given on the command line are used as-is and a failure ends the run.
/// Prompted values are asked for again until they validate, and a rejected
/// sign-in can be retried from the terminal.
///
/// # Errors
/// Returns an error if the backend is misconfigured, a prompt fails, the
/// supplied values are invalid, or the sign-in is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let mut form = LoginForm::new(&args.config)
        .map_err(|err| anyhow!(err))
        .context("invalid backend configuration")?;

    let prompts = Prompts {
        email: args.email.is_none(),
        password: args.password.is_none(),
    };
    let can_retry = prompts.any() && std::io::stdin().is_terminal();

    if let Some(email) = args.email {
        form.set_email(email);
    }
    if let Some(password) = &args.password {
        form.set_password(password.expose_secret());
    }

    let mut ask_all = true;
    loop {
        if prompts.email && (ask_all || form.errors().email.is_some()) {
            form.set_email(prompt_email(form.email())?);
        }
        if prompts.password && (ask_all || form.errors().password.is_some()) {
            form.set_password(prompt_password()?);
        }
        ask_all = false;

        let credentials = match form.begin_submit() {
            Ok(credentials) => credentials,
            Err(SubmitError::Invalid(errors)) => {
                println!("{}", form.view());
                let fixable = errors.failed().all(|field| match field {
                    Field::Email => prompts.email,
                    Field::Password => prompts.password,
                });
                if fixable {
                    continue;
                }
                return Err(anyhow!(errors).context("invalid credentials"));
            }
            Err(err @ SubmitError::AlreadyPending) => return Err(anyhow!(err)),
        };

        eprintln!("{}", form.view().submit.label);
        debug!(url = %args.config.backend_url, "signing in");

        form.send(&credentials).await;
        println!("{}", form.view());

        match form.state() {
            RequestState::Success(response) => {
                if args.print_response {
                    println!("{}", serde_json::to_string_pretty(response.body())?);
                }
                return Ok(());
            }
            RequestState::Error(message) => {
                if can_retry && confirm_retry()? {
                    ask_all = true;
                    continue;
                }
                bail!("sign-in failed: {message}");
            }
            state => bail!("sign-in ended in unexpected state: {}", state.label()),
        }
    }
}

fn prompt_email(current: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt("Email Address")
        .with_initial_text(current)
        .interact_text()
        .context("failed to read email")
}

fn prompt_password() -> Result<String> {
    Password::new()
        .with_prompt("Password")
        .interact()
        .context("failed to read password")
}

fn confirm_retry() -> Result<bool> {
    Confirm::new()
        .with_prompt("Try again?")
        .default(true)
        .interact()
        .context("failed to read answer")
}
