//! Shared helpers for turning library results into CLI output and errors.

use crate::{
    api::RequestFailure,
    auth::AuthFlow,
    routes::{Resolution, RouteAuthorizer, RouteTable, View},
};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

/// One message per line, as the forms display them.
pub(super) fn report(failure: RequestFailure) -> anyhow::Error {
    alerts(failure.messages())
}

pub(super) fn alerts(messages: &[String]) -> anyhow::Error {
    anyhow!(messages.join("\n"))
}

pub(super) fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to render output")
}

/// Resolves `path` for the current session, failing when it is not reachable.
pub(super) fn screen(auth: &AuthFlow, path: &str) -> Result<View> {
    let view = RouteAuthorizer::new(auth.session().clone()).navigate(path);
    if view == View::Home && path.trim_end_matches('/') != "" {
        return Err(match auth.session().current_user() {
            None => anyhow!("Log in to view {path}."),
            Some(user) if matches!(RouteTable::Public.resolve(path), Resolution::Render(_)) => {
                anyhow!("Already logged in as {}.", user.username)
            }
            Some(_) => anyhow!("No page at {path}."),
        });
    }
    Ok(view)
}
