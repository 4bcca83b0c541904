//! Client configuration.
//!
//! # Design
//! The token and base URL are the only settings. `from_env` reads them from
//! `WHAPI_TOKEN` and `WHAPI_API_URL`; the lookup is injectable so tests never
//! touch the process environment.

use crate::error::{AppError, WhapiError, DEFAULT_LOCALE};

/// Base URL of the hosted Whapi gateway.
pub const DEFAULT_BASE_URL: &str = "https://gate.whapi.cloud";

pub const TOKEN_ENV: &str = "WHAPI_TOKEN";
pub const BASE_URL_ENV: &str = "WHAPI_API_URL";

/// Settings a `WhapiClient` is built from.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_env() -> Result<Self, WhapiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. A missing token is a bad request.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WhapiError> {
        let token = lookup(TOKEN_ENV).unwrap_or_default();
        let config = match lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => Self::new(token).with_base_url(base_url),
            None => Self::new(token),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject an empty token.
    pub fn validate(&self) -> Result<(), WhapiError> {
        if self.token.is_empty() {
            return Err(AppError::bad_request("Token is required!", Some(DEFAULT_LOCALE)).into());
        }
        Ok(())
    }

    /// Base URL without trailing slashes.
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
