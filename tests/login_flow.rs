//! End-to-end tests for the login form against a mock auth backend.
//!
//! Each test drives a `LoginForm` the way the CLI does: fill the fields,
//! submit, then read the rendered view.

use anyhow::{Result, bail};
use serde_json::json;
use signin::config::AppConfig;
use signin::login::{LOGIN_FAILED, LOGIN_SUCCESSFUL, LoginForm, RequestState, SubmitError};
use std::net::TcpListener;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn form_for(server: &MockServer) -> Result<LoginForm> {
    let config = AppConfig {
        backend_url: server.uri(),
        ..AppConfig::default()
    };
    Ok(LoginForm::new(&config)?)
}

#[tokio::test]
async fn successful_sign_in_shows_success_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header_exists("x-request-id"))
        .and(body_json(json!({
            "email": "you@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server)?;
    form.set_email("you@example.com");
    form.set_password("hunter22");

    let state = form.submit().await?;
    let RequestState::Success(response) = state else {
        bail!("expected success, got {}", state.label());
    };
    assert_eq!(response.body(), &json!({"token": "abc"}));

    let view = form.view();
    assert_eq!(view.success, Some(LOGIN_SUCCESSFUL));
    assert_eq!(view.error, None);
    assert!(!view.submit.disabled);
    assert!(view.to_string().contains(LOGIN_SUCCESSFUL));
    Ok(())
}

#[tokio::test]
async fn rejected_sign_in_shows_server_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server)?;
    form.set_email("you@example.com");
    form.set_password("wrong-password");

    let state = form.submit().await?;
    assert_eq!(state.error_message(), Some("Invalid credentials"));

    let view = form.view();
    assert_eq!(view.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(view.success, None);
    Ok(())
}

#[tokio::test]
async fn unreadable_error_body_falls_back_to_generic_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server)?;
    form.set_email("you@example.com");
    form.set_password("hunter22");

    let state = form.submit().await?;
    assert_eq!(state.error_message(), Some(LOGIN_FAILED));
    Ok(())
}

#[tokio::test]
async fn server_message_is_rendered_on_one_clean_line() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "\u{1b}[2J\u{1b}[31mAccount locked\nContact support"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server)?;
    form.set_email("you@example.com");
    form.set_password("hunter22");

    let state = form.submit().await?;
    assert_eq!(
        state.error_message(),
        Some("[2J[31mAccount locked Contact support")
    );
    assert!(!form.view().to_string().contains('\u{1b}'));
    Ok(())
}

#[tokio::test]
async fn pending_request_disables_submit_and_blocks_resubmit() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server)?;
    form.set_email("you@example.com");
    form.set_password("hunter22");

    let credentials = form.begin_submit()?;
    let view = form.view();
    assert_eq!(view.submit.label, "Signing In...");
    assert!(view.submit.disabled);
    assert!(view.to_string().contains("[ Signing In... ] (disabled)"));

    assert!(matches!(
        form.begin_submit(),
        Err(SubmitError::AlreadyPending)
    ));

    let state = form.send(&credentials).await;
    assert!(matches!(state, RequestState::Success(_)));
    assert_eq!(form.view().submit.label, "Sign In");
    Ok(())
}

#[tokio::test]
async fn invalid_input_never_reaches_the_backend() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = form_for(&server)?;
    form.set_email("not-an-email");
    form.set_password("123");

    let Err(SubmitError::Invalid(errors)) = form.submit().await else {
        bail!("expected validation errors");
    };
    assert_eq!(errors.email.as_deref(), Some("Enter a valid email"));
    assert_eq!(
        errors.password.as_deref(),
        Some("Password must be at least 6 characters")
    );
    assert_eq!(form.state(), &RequestState::Idle);

    // Fixing a field after a failed attempt clears its message right away.
    form.set_email("you@example.com");
    assert_eq!(form.errors().email, None);
    assert!(form.errors().password.is_some());
    Ok(())
}
