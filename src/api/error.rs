//! The one failure shape every backend call resolves to. The backend reports
//! `error.message` either as a string or as a list of strings; both collapse
//! here into a non-empty list so callers never branch on the shape.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Fallback when nothing better can be said about a failure.
const GENERIC_FAILURE: &str = "Request failed.";

/// A failed call, carrying every message the caller should display.
///
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct RequestFailure {
    messages: Vec<String>,
}

impl RequestFailure {
    /// A failure with a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_messages(vec![message.into()])
    }

    /// A failure from a list of messages; an empty list becomes the generic message.
    #[must_use]
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self {
                messages: vec![GENERIC_FAILURE.to_string()],
            }
        } else {
            Self { messages }
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Builds the failure for a non-2xx response from its (optional) JSON body.
    pub(crate) fn from_error_body(status: StatusCode, body: Option<&Value>) -> Self {
        let messages = body
            .and_then(|body| body.get("error"))
            .and_then(|error| error.get("message"))
            .map(normalize_message)
            .filter(|messages| !messages.is_empty())
            .unwrap_or_else(|| vec![format!("Request failed ({status}).")]);
        Self { messages }
    }

    /// Builds the failure for a request that never produced a response.
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new("Request timed out. Please try again.")
        } else {
            Self::new(format!("Unable to reach the server: {err}"))
        }
    }
}

impl From<RequestFailure> for Vec<String> {
    fn from(failure: RequestFailure) -> Self {
        failure.messages
    }
}

/// Turns an `error.message` value into a list of strings.
///
/// Lists are kept in order; a single value becomes a one-element list. Nulls
/// carry no text and are dropped.
#[must_use]
pub fn normalize_message(message: &Value) -> Vec<String> {
    match message {
        Value::Array(items) => items.iter().filter_map(message_text).collect(),
        other => message_text(other).into_iter().collect(),
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
