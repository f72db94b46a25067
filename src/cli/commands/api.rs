//! Connection arguments: where the backend lives and which token to present.

use crate::api::config::{DEFAULT_BASE_URL, ENV_BASE_URL};
use anyhow::{Context, Result};
use clap::{Arg, Command};
use secrecy::SecretString;

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_TOKEN: &str = "token";

#[derive(Debug, Clone)]
pub struct Options {
    pub base_url: String,
    pub token: Option<SecretString>,
}

impl Options {
    /// # Errors
    /// Returns an error if the base url is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let base_url = matches
            .get_one::<String>(ARG_BASE_URL)
            .cloned()
            .context("missing required argument: --base-url")?;

        let token = matches
            .get_one::<String>(ARG_TOKEN)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .map(SecretString::from);

        Ok(Self { base_url, token })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BASE_URL)
                .long(ARG_BASE_URL)
                .help("Base URL of the Jobly API")
                .env(ENV_BASE_URL)
                .default_value(DEFAULT_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long(ARG_TOKEN)
                .help("Token from a previous login, used to restore the session")
                .env("JOBLY_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
}
