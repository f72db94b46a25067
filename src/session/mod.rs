//! Process-wide session state. The token and the current user live in one
//! optional pair, so they are always set and cleared together. Readers take
//! cheap snapshots; only the auth flows may replace the pair, and they always
//! replace it wholesale.

pub mod token;

use crate::api::types::UserProfile;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// An authenticated session: the bearer token and the profile it belongs to.
#[derive(Clone, Debug)]
struct ActiveSession {
    token: SecretString,
    user: UserProfile,
}

/// Point-in-time view of the session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    active: Option<ActiveSession>,
}

impl Session {
    /// An anonymous session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn token(&self) -> Option<&SecretString> {
        self.active.as_ref().map(|active| &active.token)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.active.as_ref().map(|active| &active.user)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    /// Builds an authenticated session. Kept crate-private so only the auth
    /// flows and tests can fabricate one.
    pub(crate) fn authenticated(token: SecretString, user: UserProfile) -> Self {
        Self {
            active: Some(ActiveSession { token, user }),
        }
    }
}

/// Shared holder for the one session of this process.
///
/// Cloning the store clones the handle, not the session.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.snapshot().current_user().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Token value to present as bearer credential; empty when anonymous.
    pub(crate) fn bearer_token(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token()
            .map(|token| token.expose_secret().to_string())
            .unwrap_or_default()
    }

    /// Replaces the session after a successful login, signup or profile change.
    pub(crate) fn set_session(&self, token: SecretString, user: UserProfile) {
        debug!(username = %user.username, "session established");
        let next = Session::authenticated(token, user);
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Swaps in a fresh copy of the signed-in user's profile, keeping the token.
    /// Does nothing and returns `false` if that user is no longer signed in.
    pub(crate) fn replace_user(&self, user: UserProfile) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let token = match guard.active.as_ref() {
            Some(active) if active.user.username == user.username => active.token.clone(),
            _ => return false,
        };
        *guard = Session::authenticated(token, user);
        true
    }

    /// Edits the signed-in user's profile in place under the write lock.
    /// Does nothing and returns `false` unless `username` is signed in.
    pub(crate) fn modify_user(&self, username: &str, edit: impl FnOnce(&mut UserProfile)) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match guard.active.as_mut() {
            Some(active) if active.user.username == username => {
                edit(&mut active.user);
                true
            }
            _ => false,
        }
    }

    /// Drops the token and the user together.
    pub(crate) fn clear_session(&self) {
        debug!("session cleared");
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Session::anonymous();
    }
}
