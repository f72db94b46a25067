//! Form state for login, signup and profile editing. A form holds its inputs
//! and the alert messages from the last failed submit. On success it clears
//! its inputs and asks to navigate home; on failure it shows every message,
//! keeps its inputs and stays put.

use crate::{
    api::{
        RequestFailure,
        types::{LoginRequest, ProfileUpdate, RegisterRequest, UserProfile},
    },
    auth::AuthFlow,
    routes::HOME_PATH,
};

/// What the caller should do after a submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Navigate(&'static str),
    Stay,
}

/// Records a submit result: clears alerts on success, replaces them with the
/// failure's messages otherwise.
fn settle<T>(
    alerts: &mut Vec<String>,
    result: Result<T, RequestFailure>,
    on_success: impl FnOnce(T),
) -> Outcome {
    match result {
        Ok(value) => {
            alerts.clear();
            on_success(value);
            Outcome::Navigate(HOME_PATH)
        }
        Err(failure) => {
            *alerts = failure.into_messages();
            Outcome::Stay
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub input: LoginRequest,
    alerts: Vec<String>,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates an input by field name; returns `false` for unknown fields.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match field {
            "username" => self.input.username = value.into(),
            "password" => self.input.password = value.into(),
            _ => return false,
        }
        true
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub async fn submit(&mut self, auth: &AuthFlow) -> Outcome {
        let result = auth.login(&self.input).await;
        let input = &mut self.input;
        settle(&mut self.alerts, result, |_| *input = LoginRequest::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub input: RegisterRequest,
    alerts: Vec<String>,
}

impl SignupForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates an input by field name; returns `false` for unknown fields.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match field {
            "username" => self.input.username = value.into(),
            "password" => self.input.password = value.into(),
            "firstName" => self.input.first_name = value.into(),
            "lastName" => self.input.last_name = value.into(),
            "email" => self.input.email = value.into(),
            _ => return false,
        }
        true
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub async fn submit(&mut self, auth: &AuthFlow) -> Outcome {
        let result = auth.signup(&self.input).await;
        let input = &mut self.input;
        settle(&mut self.alerts, result, |_| *input = RegisterRequest::default())
    }
}

/// Profile editor seeded from the signed-in user. The username is shown but
/// cannot be edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    input: ProfileUpdate,
    alerts: Vec<String>,
}

impl ProfileForm {
    #[must_use]
    pub fn seeded(user: &UserProfile) -> Self {
        Self {
            input: ProfileUpdate::from(user),
            alerts: Vec::new(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.input.username
    }

    #[must_use]
    pub fn input(&self) -> &ProfileUpdate {
        &self.input
    }

    /// Updates an input by field name; the username and unknown fields are refused.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match field {
            "firstName" => self.input.first_name = value.into(),
            "lastName" => self.input.last_name = value.into(),
            "email" => self.input.email = value.into(),
            _ => return false,
        }
        true
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Saves the profile; on success the inputs are re-seeded from the saved user.
    pub async fn submit(&mut self, auth: &AuthFlow) -> Outcome {
        let result = auth.update_profile(&self.input).await;
        let input = &mut self.input;
        settle(&mut self.alerts, result, |user| *input = ProfileUpdate::from(&user))
    }
}
