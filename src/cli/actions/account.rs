//! Account actions. These drive the same form state the screens use, so a
//! failure reports every message and a success leaves a populated session.

use super::output::{alerts, render, report, screen};
use crate::{
    api::types::{LoginRequest, RegisterRequest},
    auth::AuthFlow,
    forms::{LoginForm, Outcome, ProfileForm, SignupForm},
    routes::View,
};
use anyhow::{Context, Result, bail};
use secrecy::ExposeSecret;

/// Requested profile changes; `None` leaves a field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl ProfileChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

fn session_token(auth: &AuthFlow) -> Result<String> {
    auth.session()
        .snapshot()
        .token()
        .map(|token| token.expose_secret().to_string())
        .context("no session was established")
}

/// Logs in and returns the token so later invocations can pass `--token`.
///
/// # Errors
/// Returns an error when already logged in, or every message from a rejected login.
pub async fn login(auth: &AuthFlow, request: LoginRequest) -> Result<String> {
    screen(auth, "/login")?;
    let mut form = LoginForm::new();
    form.input = request;
    match form.submit(auth).await {
        Outcome::Navigate(_) => session_token(auth),
        Outcome::Stay => Err(alerts(form.alerts())),
    }
}

/// Registers and returns the token of the new session.
///
/// # Errors
/// Returns an error when already logged in, or every message from a rejected registration.
pub async fn signup(auth: &AuthFlow, request: RegisterRequest) -> Result<String> {
    screen(auth, "/signup")?;
    let mut form = SignupForm::new();
    form.input = request;
    match form.submit(auth).await {
        Outcome::Navigate(_) => session_token(auth),
        Outcome::Stay => Err(alerts(form.alerts())),
    }
}

/// # Errors
/// Returns an error when anonymous.
pub fn profile(auth: &AuthFlow) -> Result<String> {
    match screen(auth, "/profile")? {
        View::Profile(user) => render(&user),
        _ => bail!("Log in to view /profile."),
    }
}

/// # Errors
/// Returns an error when anonymous, when nothing was asked to change, or with
/// every message from a rejected update.
pub async fn update_profile(auth: &AuthFlow, changes: ProfileChanges) -> Result<String> {
    if changes.is_empty() {
        bail!("Nothing to update: pass --first-name, --last-name or --email.");
    }
    let View::Profile(user) = screen(auth, "/profile")? else {
        bail!("Log in to view /profile.");
    };

    let mut form = ProfileForm::seeded(&user);
    for (field, value) in [
        ("firstName", changes.first_name),
        ("lastName", changes.last_name),
        ("email", changes.email),
    ] {
        if let Some(value) = value {
            form.set(field, value);
        }
    }

    match form.submit(auth).await {
        Outcome::Navigate(_) => render(&auth.session().current_user()),
        Outcome::Stay => Err(alerts(form.alerts())),
    }
}

/// # Errors
/// Returns an error when anonymous or when the application is rejected.
pub async fn apply(auth: &AuthFlow, job_id: u64) -> Result<String> {
    let applied = auth.apply_to_job(job_id).await.map_err(report)?;
    Ok(format!("Applied to job {applied}."))
}
