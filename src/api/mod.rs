//! The request gateway. Every backend call goes through [`JoblyApi::send`],
//! which attaches the session's bearer token, places the payload according to
//! the verb, and turns any failure into a [`RequestFailure`]. Nothing outside
//! this module knows the URL layout or the failure envelope.

mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod types;

pub use config::{ApiConfig, ConfigError};
pub use error::RequestFailure;
pub use request::{Payload, RequestDescriptor, Verb};

use crate::session::SessionStore;
use request::{Placement, build_url};
use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;
use tracing::{Instrument, debug, error, info_span};

#[derive(Clone, Debug)]
pub struct JoblyApi {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl JoblyApi {
    /// Builds a gateway reading its token from `session`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.as_str().to_string(),
            session,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Sends one call with the current session token.
    ///
    /// # Errors
    /// Returns a `RequestFailure` for any non-2xx response, transport failure,
    /// or undecodable success body.
    pub async fn send(
        &self,
        endpoint: &str,
        payload: Payload,
        verb: Verb,
    ) -> Result<Value, RequestFailure> {
        let token = self.session.bearer_token();
        self.dispatch(RequestDescriptor::new(endpoint, payload, verb), &token)
            .await
    }

    /// Sends one call presenting `token` instead of the session's. Used by the
    /// auth flows to load a profile before the new session is committed.
    pub(crate) async fn send_with_token(
        &self,
        descriptor: RequestDescriptor,
        token: &str,
    ) -> Result<Value, RequestFailure> {
        self.dispatch(descriptor, token).await
    }

    async fn dispatch(
        &self,
        descriptor: RequestDescriptor,
        token: &str,
    ) -> Result<Value, RequestFailure> {
        debug!(
            endpoint = %descriptor.endpoint,
            payload = %descriptor.loggable_payload(),
            verb = %descriptor.verb,
            "API call"
        );

        let url = build_url(&self.base_url, &descriptor.endpoint);
        let span = info_span!(
            "jobly.request",
            http.method = descriptor.verb.as_str(),
            url = %url
        );

        let mut builder = self
            .http
            .request(descriptor.verb.method(), &url)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        builder = match descriptor.placement() {
            Placement::Query(pairs) if pairs.is_empty() => builder,
            Placement::Query(pairs) => builder.query(&pairs),
            Placement::Body(body) => builder.json(&body),
        };

        let response = builder.send().instrument(span).await.map_err(|err| {
            error!(endpoint = %descriptor.endpoint, error = %err, "API error: no response");
            RequestFailure::transport(&err)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| {
            error!(endpoint = %descriptor.endpoint, error = %err, "API error: unreadable body");
            RequestFailure::transport(&err)
        })?;

        if status.is_success() {
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_slice(&bytes)
                .map_err(|err| RequestFailure::new(format!("Failed to decode response: {err}")))
        } else {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            let failure = RequestFailure::from_error_body(status, body.as_ref());
            error!(
                endpoint = %descriptor.endpoint,
                status = status.as_u16(),
                messages = ?failure.messages(),
                "API error"
            );
            Err(failure)
        }
    }
}
