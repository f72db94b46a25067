//! Request shaping. The backend reads list/filter input from the query string
//! and mutation input from the JSON body, so where the payload goes depends
//! only on the verb.

use super::error::RequestFailure;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Field name to value mapping sent with a call.
pub type Payload = Map<String, Value>;

/// Payload keys whose values never reach the logs.
const REDACTED_KEYS: &[&str] = &["password"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Verb {
    #[default]
    Get,
    Post,
    Patch,
}

impl Verb {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Patch => Method::PATCH,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Where a descriptor's payload travels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    Query(Vec<(String, String)>),
    Body(Payload),
}

/// One outbound call: endpoint relative to the base address, payload, verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub payload: Payload,
    pub verb: Verb,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, payload: Payload, verb: Verb) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload,
            verb,
        }
    }

    /// A `get` with an empty payload.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Payload::new(), Verb::Get)
    }

    /// `get` sends the payload as query parameters; every other verb sends it
    /// as the body.
    #[must_use]
    pub fn placement(&self) -> Placement {
        match self.verb {
            Verb::Get => Placement::Query(query_pairs(&self.payload)),
            Verb::Post | Verb::Patch => Placement::Body(self.payload.clone()),
        }
    }

    /// Payload as it may appear in traces.
    #[must_use]
    pub fn loggable_payload(&self) -> Value {
        let redacted = self
            .payload
            .iter()
            .map(|(key, value)| {
                if REDACTED_KEYS.contains(&key.as_str()) {
                    (key.clone(), Value::String("<redacted>".to_string()))
                } else {
                    (key.clone(), value.clone())
                }
            })
            .collect();
        Value::Object(redacted)
    }
}

/// Flattens a payload into query pairs. Nulls are omitted, strings go out
/// verbatim, everything else as its JSON text.
fn query_pairs(payload: &Payload) -> Vec<(String, String)> {
    payload
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key.clone(), text.clone())),
            other => Some((key.clone(), other.to_string())),
        })
        .collect()
}

/// Serializes a typed input into a payload mapping.
///
/// # Errors
/// Returns a `RequestFailure` if the value does not serialize to a JSON object.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Payload, RequestFailure> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(Payload::new()),
        Ok(_) => Err(RequestFailure::new(
            "Failed to encode request: payload must be an object",
        )),
        Err(err) => Err(RequestFailure::new(format!(
            "Failed to encode request: {err}"
        ))),
    }
}

/// Joins the base address and an endpoint with exactly one slash.
pub(crate) fn build_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let endpoint = endpoint.trim();

    if base.is_empty() {
        endpoint.to_string()
    } else {
        format!("{}/{}", base, endpoint.trim_start_matches('/'))
    }
}
