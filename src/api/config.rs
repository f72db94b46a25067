//! Where the backend lives. The base address comes from `JOBLY_BASE_URL`
//! when set and non-blank, otherwise the local development server.

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const ENV_BASE_URL: &str = "JOBLY_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("unsupported base url scheme: {0}")]
    Scheme(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Parses and checks a base address.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute `http`/`https` URL.
    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url.trim())?;
        match base_url.scheme() {
            "http" | "https" => Ok(Self { base_url }),
            other => Err(ConfigError::Scheme(other.to_string())),
        }
    }

    /// Reads the base address from the environment, falling back to the default.
    ///
    /// # Errors
    /// Returns an error if the configured value is not a valid base address.
    pub fn load() -> Result<Self, ConfigError> {
        let configured = std::env::var(ENV_BASE_URL)
            .ok()
            .and_then(|value| normalize_value(&value));
        Self::parse(configured.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.jobly.dev "),
            Some("https://api.jobly.dev".to_string())
        );
    }

    #[test]
    fn load_defaults_to_local_server() {
        temp_env::with_var(ENV_BASE_URL, None::<&str>, || {
            let config = ApiConfig::load().unwrap();
            assert_eq!(config.base_url.as_str(), "http://localhost:3001/");
        });
    }

    #[test]
    fn load_ignores_blank_override() {
        temp_env::with_var(ENV_BASE_URL, Some("   "), || {
            assert_eq!(
                ApiConfig::load().unwrap(),
                ApiConfig::parse(DEFAULT_BASE_URL).unwrap()
            );
        });
    }

    #[test]
    fn load_uses_override_when_present() {
        temp_env::with_var(ENV_BASE_URL, Some("https://api.jobly.dev"), || {
            let config = ApiConfig::load().unwrap();
            assert_eq!(config.base_url.host_str(), Some("api.jobly.dev"));
        });
    }

    #[test]
    fn parse_rejects_non_http_schemes() {
        assert!(matches!(
            ApiConfig::parse("ftp://files.example.com"),
            Err(ConfigError::Scheme(scheme)) if scheme == "ftp"
        ));
        assert!(matches!(
            ApiConfig::parse("not a url"),
            Err(ConfigError::Url(_))
        ));
    }
}
