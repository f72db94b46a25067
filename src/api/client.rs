//! Domain operations on top of `send`. Each one fixes the verb and endpoint
//! and unwraps exactly one key of the success envelope.

use super::{
    JoblyApi, RequestFailure,
    request::{Payload, RequestDescriptor, Verb, to_payload},
    types::{Company, CompanySearch, Job, JobSearch, LoginRequest, ProfileUpdate, RegisterRequest, UserProfile},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

impl JoblyApi {
    /// Lists companies, optionally filtered.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the call fails.
    pub async fn get_companies(
        &self,
        search: &CompanySearch,
    ) -> Result<Vec<Company>, RequestFailure> {
        let body = self.send("companies", to_payload(search)?, Verb::Get).await?;
        unwrap_envelope(body, "companies")
    }

    /// Fetches one company, including its jobs.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the handle is blank or the company does not exist.
    pub async fn get_company(&self, handle: &str) -> Result<Company, RequestFailure> {
        let handle = required_segment(handle, "Company handle")?;
        let body = self
            .send(&format!("companies/{handle}"), Payload::new(), Verb::Get)
            .await?;
        unwrap_envelope(body, "company")
    }

    /// Lists jobs, optionally filtered.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the call fails.
    pub async fn get_jobs(&self, search: &JobSearch) -> Result<Vec<Job>, RequestFailure> {
        let body = self.send("jobs", to_payload(search)?, Verb::Get).await?;
        unwrap_envelope(body, "jobs")
    }

    /// Registers a new user and returns its token.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if registration is rejected.
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<String, RequestFailure> {
        let body = self
            .send("auth/register", to_payload(request)?, Verb::Post)
            .await?;
        unwrap_envelope(body, "token")
    }

    /// Exchanges credentials for a token.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the credentials are rejected.
    pub async fn login_user(&self, request: &LoginRequest) -> Result<String, RequestFailure> {
        let body = self
            .send("auth/token", to_payload(request)?, Verb::Post)
            .await?;
        unwrap_envelope(body, "token")
    }

    /// Fetches a user's profile.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the username is blank or the call fails.
    pub async fn get_user_detail(&self, username: &str) -> Result<UserProfile, RequestFailure> {
        let username = required_segment(username, "Username")?;
        let body = self
            .send(&format!("users/{username}"), Payload::new(), Verb::Get)
            .await?;
        unwrap_envelope(body, "user")
    }

    /// Same as `get_user_detail`, presenting a token that is not yet in the session.
    pub(crate) async fn get_user_detail_with_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<UserProfile, RequestFailure> {
        let username = required_segment(username, "Username")?;
        let body = self
            .send_with_token(RequestDescriptor::get(format!("users/{username}")), token)
            .await?;
        unwrap_envelope(body, "user")
    }

    /// Saves first name, last name and email. The username only addresses the
    /// user and is never sent in the body.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the username is blank or the update is rejected.
    pub async fn update_user(&self, update: &ProfileUpdate) -> Result<UserProfile, RequestFailure> {
        let username = required_segment(&update.username, "Username")?;
        let body = self
            .send(&format!("users/{username}"), to_payload(update)?, Verb::Patch)
            .await?;
        unwrap_envelope(body, "user")
    }

    /// Applies `username` to a job and returns the applied job id.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the username is blank or the application is rejected.
    pub async fn apply_to_job(&self, username: &str, job_id: u64) -> Result<u64, RequestFailure> {
        let username = required_segment(username, "Username")?;
        let body = self
            .send(
                &format!("users/{username}/jobs/{job_id}"),
                Payload::new(),
                Verb::Post,
            )
            .await?;
        unwrap_envelope(body, "applied")
    }
}

/// Takes `key` out of a success envelope like `{ "companies": [...] }`.
fn unwrap_envelope<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, RequestFailure> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| RequestFailure::new(format!("Unexpected response: missing `{key}`.")))?;
    T::deserialize(value)
        .map_err(|err| RequestFailure::new(format!("Failed to decode `{key}`: {err}")))
}

fn required_segment<'a>(value: &'a str, label: &str) -> Result<&'a str, RequestFailure> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(RequestFailure::new(format!("{label} is required.")))
    } else {
        Ok(trimmed)
    }
}
