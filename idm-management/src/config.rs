//! Client configuration.

use std::env;
use std::time::Duration;

use crate::error::{ManagementError, Result};

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the tenant domain, e.g. `example.eu.auth0.com`.
pub const ENV_DOMAIN: &str = "IDM_MANAGEMENT_DOMAIN";
/// Environment variable holding an explicit base URL. Takes precedence over [`ENV_DOMAIN`].
pub const ENV_BASE_URL: &str = "IDM_MANAGEMENT_BASE_URL";
/// Environment variable holding the management API access token.
pub const ENV_TOKEN: &str = "IDM_MANAGEMENT_TOKEN";

/// Configuration for [`HttpDoer`](crate::HttpDoer).
#[derive(Debug, Clone)]
pub struct ManagementConfig {
    /// Base URL every request path is appended to, without trailing slash
    /// (e.g. `https://example.eu.auth0.com/api/v2`).
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ManagementConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ManagementConfig {
    /// Configuration for a tenant domain; the base URL becomes `https://{domain}/api/v2`.
    pub fn for_tenant(domain: &str, token: impl Into<String>) -> Self {
        let domain = domain
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        Self::with_base_url(format!("https://{domain}/api/v2"), token)
    }

    /// Configuration for an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Reads the configuration from `IDM_MANAGEMENT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let token = env::var(ENV_TOKEN).map_err(|_| ManagementError::InvalidConfig {
            detail: format!("{ENV_TOKEN} is not set"),
        })?;

        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            return Ok(Self::with_base_url(base_url, token));
        }

        let domain = env::var(ENV_DOMAIN).map_err(|_| ManagementError::InvalidConfig {
            detail: format!("neither {ENV_BASE_URL} nor {ENV_DOMAIN} is set"),
        })?;
        Ok(Self::for_tenant(&domain, token))
    }

    #[must_use]
    pub fn timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks the fields a working client needs.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ManagementError::InvalidConfig {
                detail: "base_url is empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ManagementError::InvalidConfig {
                detail: format!("base_url must start with http:// or https://: {}", self.base_url),
            });
        }
        if self.token.is_empty() {
            return Err(ManagementError::InvalidConfig {
                detail: "token is empty".to_string(),
            });
        }
        Ok(())
    }
}
