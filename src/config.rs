use std::env;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};

use crate::error::{ArcadiaError, Result};

pub const DEFAULT_BASE_URL: &str = "https://arcadia-api.xyz/api/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("arcadia-rs/", env!("CARGO_PKG_VERSION"), " (GitHub: Zenrac)");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub auth_token: String,
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            auth_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self::default().with_token(auth_token)
    }

    /// Reads `ARCADIA_TOKEN` and `ARCADIA_BASE_URL`. Unset values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = env::var("ARCADIA_TOKEN") {
            config.auth_token = token;
        }
        if let Ok(base_url) = env::var("ARCADIA_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }

    pub fn with_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = auth_token.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base URL without trailing slashes, ready to have `/<endpoint>` appended.
    pub(crate) fn endpoint_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The fixed header set sent with every request. The token goes out as-is,
    /// without a scheme prefix.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| ArcadiaError::ConfigError(format!("Invalid user agent: {}", e)))?;
        let mut token = HeaderValue::from_str(&self.auth_token)
            .map_err(|_| ArcadiaError::ConfigError("Auth token is not a valid header value".into()))?;
        token.set_sensitive(true);

        headers.insert(USER_AGENT, user_agent);
        headers.insert(AUTHORIZATION, token);
        Ok(headers)
    }
}
