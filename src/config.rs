//! Configuration constants and utilities for fxconv
//!
//! Endpoint prefixes, timeouts and the log filter can be overridden through
//! environment variables; everything else is fixed.

use std::time::Duration;

/// Primary endpoint prefix; the date selector is appended directly after the `@`
pub const DEFAULT_PRIMARY_URL: &str = "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@";

/// Mirror endpoint prefix, tried once when the primary fails
pub const DEFAULT_MIRROR_URL: &str =
    "https://currency-api.pages.dev/npm/@fawazahmed0/currency-api@";

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Environment variable name for overriding the primary endpoint prefix
pub const PRIMARY_URL_ENV_VAR: &str = "FXCONV_API_URL";

/// Environment variable name for overriding the mirror endpoint prefix
pub const MIRROR_URL_ENV_VAR: &str = "FXCONV_MIRROR_URL";

/// Environment variable name for an optional request timeout in seconds
pub const TIMEOUT_ENV_VAR: &str = "FXCONV_TIMEOUT_SECS";

/// Environment variable name for the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "FXCONV_LOG_LEVEL";

/// Primary and mirror URL prefixes used by the rate client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    primary: String,
    mirror: String,
}

impl Endpoints {
    pub fn new(primary: impl Into<String>, mirror: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            mirror: mirror.into(),
        }
    }

    /// Build endpoints from the environment, falling back to the public hosts
    pub fn from_env() -> Self {
        Self::new(get_primary_url(), get_mirror_url())
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn mirror(&self) -> &str {
        &self.mirror
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_URL, DEFAULT_MIRROR_URL)
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var_os(var)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Get the primary URL prefix, checking environment variable first
pub fn get_primary_url() -> String {
    env_or(PRIMARY_URL_ENV_VAR, DEFAULT_PRIMARY_URL)
}

/// Get the mirror URL prefix, checking environment variable first
pub fn get_mirror_url() -> String {
    env_or(MIRROR_URL_ENV_VAR, DEFAULT_MIRROR_URL)
}

/// Get the tracing filter directive
pub fn get_log_level() -> String {
    env_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL)
}

/// Get the request timeout; `None` means requests may block indefinitely
pub fn get_timeout() -> Option<Duration> {
    std::env::var(TIMEOUT_ENV_VAR)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
