//! Authentication flows. These are the only callers of the session mutators:
//! login and signup establish a session, logout clears it, and profile or
//! application changes refresh the signed-in user. A failed call never
//! touches the session.
//!
//! Flow overview: login/signup obtain a token, read the username from its
//! claims, load that user's profile with the new token, and only then commit
//! token and profile together.

use crate::{
    api::{
        JoblyApi, RequestFailure,
        types::{LoginRequest, ProfileUpdate, RegisterRequest, UserProfile},
    },
    session::{SessionStore, token::decode_claims},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

const LOGIN_REQUIRED: &str = "You must be logged in.";

#[derive(Clone, Debug)]
pub struct AuthFlow {
    api: JoblyApi,
}

impl AuthFlow {
    #[must_use]
    pub fn new(api: JoblyApi) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &JoblyApi {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Logs in and establishes the session.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the credentials are rejected or the
    /// profile cannot be loaded; the prior session is left as it was.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<UserProfile, RequestFailure> {
        let token = self.api.login_user(credentials).await?;
        self.establish(SecretString::from(token)).await
    }

    /// Registers a new user and establishes the session.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if registration is rejected or the profile
    /// cannot be loaded; the prior session is left as it was.
    pub async fn signup(
        &self,
        registration: &RegisterRequest,
    ) -> Result<UserProfile, RequestFailure> {
        let token = self.api.register_user(registration).await?;
        self.establish(SecretString::from(token)).await
    }

    /// Establishes the session from a token issued earlier.
    ///
    /// # Errors
    /// Returns a `RequestFailure` if the token is unreadable or rejected.
    pub async fn restore(&self, token: SecretString) -> Result<UserProfile, RequestFailure> {
        self.establish(token).await
    }

    /// Clears the session.
    pub fn logout(&self) {
        self.session().clear_session();
        info!("logged out");
    }

    /// Saves the signed-in user's profile and refreshes the session with it.
    /// The update always targets the signed-in user.
    ///
    /// # Errors
    /// Returns a `RequestFailure` when anonymous or when the update is rejected.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, RequestFailure> {
        let current = self.require_user()?;
        let update = ProfileUpdate {
            username: current.username,
            ..update.clone()
        };

        let user = self.api.update_user(&update).await?;
        if !self.session().replace_user(user.clone()) {
            warn!(username = %user.username, "session changed during profile update");
        }
        Ok(user)
    }

    /// Applies the signed-in user to a job and records it on their profile.
    ///
    /// # Errors
    /// Returns a `RequestFailure` when anonymous or when the application is rejected.
    pub async fn apply_to_job(&self, job_id: u64) -> Result<u64, RequestFailure> {
        let username = self.require_user()?.username;
        let applied = self.api.apply_to_job(&username, job_id).await?;

        let recorded = self.session().modify_user(&username, |user| {
            if !user.has_applied(applied) {
                user.applications.push(applied);
            }
        });
        if !recorded {
            warn!(job_id = applied, "session changed during job application");
        }
        Ok(applied)
    }

    fn require_user(&self) -> Result<UserProfile, RequestFailure> {
        self.session()
            .current_user()
            .ok_or_else(|| RequestFailure::new(LOGIN_REQUIRED))
    }

    async fn establish(&self, token: SecretString) -> Result<UserProfile, RequestFailure> {
        let claims = decode_claims(token.expose_secret()).map_err(|err| {
            warn!(error = %err, "received an unreadable token");
            RequestFailure::new(format!("Received an invalid token: {err}"))
        })?;

        let user = self
            .api
            .get_user_detail_with_token(&claims.username, token.expose_secret())
            .await?;

        self.session().set_session(token, user.clone());
        info!(username = %user.username, "logged in");
        Ok(user)
    }
}
