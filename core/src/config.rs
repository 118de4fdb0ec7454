//! Client configuration.
//!
//! A config names the API key, the origin every request goes to and the
//! deployment profile deciding how the key travels and which path prefix the
//! gateway expects. It is consumed when the client is built and never
//! changes afterwards.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ArariaError;

pub const DEFAULT_BASE_URL: &str = "https://prod-api.araria.com.br";
pub const API_KEY_HEADER: &str = "x-araria-key";

pub const ENV_API_KEY: &str = "ARARIA_API_KEY";
pub const ENV_BASE_URL: &str = "ARARIA_BASE_URL";
pub const ENV_PROFILE: &str = "ARARIA_PROFILE";

/// How the API key is attached to requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `x-araria-key: <key>`
    ApiKeyHeader,
    /// `Authorization: Bearer <key>`
    Bearer,
}

impl AuthScheme {
    /// Header name and value carrying `key`.
    pub fn header(self, key: &str) -> (&'static str, String) {
        match self {
            AuthScheme::ApiKeyHeader => (API_KEY_HEADER, key.to_string()),
            AuthScheme::Bearer => ("authorization", format!("Bearer {key}")),
        }
    }
}

/// A deployment target of the Araria API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeploymentProfile {
    /// The public API: `x-araria-key` header, paths at the origin root.
    #[default]
    Standard,
    /// Behind the shared gateway: bearer token, paths under `araria/`.
    Gateway,
}

impl DeploymentProfile {
    pub fn auth_scheme(self) -> AuthScheme {
        match self {
            DeploymentProfile::Standard => AuthScheme::ApiKeyHeader,
            DeploymentProfile::Gateway => AuthScheme::Bearer,
        }
    }

    /// Segment inserted between the base URL and every endpoint path.
    pub fn path_prefix(self) -> &'static str {
        match self {
            DeploymentProfile::Standard => "",
            DeploymentProfile::Gateway => "araria/",
        }
    }
}

impl FromStr for DeploymentProfile {
    type Err = ArariaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(DeploymentProfile::Standard),
            "gateway" => Ok(DeploymentProfile::Gateway),
            other => Err(ArariaError::Config(format!(
                "unknown deployment profile `{other}` (expected `standard` or `gateway`)"
            ))),
        }
    }
}

pub struct ClientConfig {
    api_key: SecretString,
    base_url: Option<String>,
    profile: DeploymentProfile,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: None,
            profile: DeploymentProfile::default(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: DeploymentProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Build a config from `ARARIA_API_KEY`, `ARARIA_BASE_URL` and
    /// `ARARIA_PROFILE`. Only the key is required.
    pub fn from_env() -> Result<Self, ArariaError> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ArariaError::Config(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Ok(profile) = std::env::var(ENV_PROFILE) {
            config = config.with_profile(profile.parse()?);
        }
        Ok(config)
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn profile(&self) -> DeploymentProfile {
        self.profile
    }

    /// The origin requests go to: the configured base URL, or the production
    /// default when unset or empty, without trailing slashes.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Header name and value carrying the API key under this profile.
    pub fn auth_header(&self) -> (&'static str, String) {
        self.profile.auth_scheme().header(self.api_key.expose_secret())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("profile", &self.profile)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_origin() {
        let config = ClientConfig::new("k");
        assert_eq!(config.resolved_base_url(), "https://prod-api.araria.com.br");
        assert_eq!(config.profile(), DeploymentProfile::Standard);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("k").with_base_url("https://x.test/");
        assert_eq!(config.resolved_base_url(), "https://x.test");
    }

    #[test]
    fn empty_base_url_falls_back_to_default() {
        let config = ClientConfig::new("k").with_base_url("");
        assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn auth_header_follows_profile() {
        let standard = ClientConfig::new("abc123");
        assert_eq!(
            standard.auth_header(),
            ("x-araria-key", "abc123".to_string())
        );

        let gateway = ClientConfig::new("abc123").with_profile(DeploymentProfile::Gateway);
        assert_eq!(
            gateway.auth_header(),
            ("authorization", "Bearer abc123".to_string())
        );
        assert_eq!(gateway.profile().path_prefix(), "araria/");
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!(
            " Gateway ".parse::<DeploymentProfile>().unwrap(),
            DeploymentProfile::Gateway
        );
        assert!("legacy".parse::<DeploymentProfile>().is_err());
    }

    #[test]
    fn from_env_reads_all_settings() {
        temp_env::with_vars(
            [
                (ENV_API_KEY, Some("env-key")),
                (ENV_BASE_URL, Some("https://staging.test/")),
                (ENV_PROFILE, Some("gateway")),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert_eq!(config.api_key().expose_secret(), "env-key");
                assert_eq!(config.resolved_base_url(), "https://staging.test");
                assert_eq!(config.profile(), DeploymentProfile::Gateway);
            },
        );
    }

    #[test]
    fn from_env_requires_api_key() {
        temp_env::with_vars(
            [
                (ENV_API_KEY, None::<&str>),
                (ENV_BASE_URL, None),
                (ENV_PROFILE, None),
            ],
            || {
                let err = ClientConfig::from_env().unwrap_err();
                assert!(matches!(err, ArariaError::Config(_)));
            },
        );
    }
}
