//! # Jobly (session-aware API client)
//!
//! `jobly` is the client side of the Jobly job board. Every backend call goes
//! through a single gateway that attaches the session token, shapes the request
//! according to its verb, and normalizes failures into a list of messages.
//!
//! ## Session
//!
//! One [`session::SessionStore`] exists per process. It holds the bearer token
//! and the current user together, so a half-populated session cannot exist.
//! Only the authentication flows in [`auth`] replace it; everything else reads.
//!
//! ## Routes
//!
//! [`routes::RouteAuthorizer`] picks one of two disjoint route tables based on
//! whether a user is present. Anonymous visitors can reach `/`, `/login` and
//! `/signup`; authenticated users can reach `/`, `/companies`, `/jobs`,
//! `/companies/:name` and `/profile`. Anything else redirects to `/`.

pub mod api;
pub mod auth;
pub mod cli;
pub mod forms;
pub mod routes;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
