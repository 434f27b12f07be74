//! Client and extraction configuration.
//!
//! Configuration is explicit: an [`ExtractConfig`] is handed to the
//! extractor and a [`ClientConfig`] to the client. Nothing here is global.

use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Result, WolframError};

pub const DEFAULT_BASE_URL: &str = "https://api.wolframalpha.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// An app id that won't show up in logs or debug output.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value. Only call this when building a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}


/// Settings for answer extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Keep parenthesized asides in subsection text.
    ///
    /// When false, `"foo (bar)"` is treated as `"foo "`.
    /// Default: false.
    #[serde(default)]
    pub keep_parens: bool,
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether parenthesized text is kept.
    pub fn with_keep_parens(mut self, keep: bool) -> Self {
        self.keep_parens = keep;
        self
    }

    /// Load from `WOLFRAM_KEEP_PARENS` (defaults to false when unset).
    pub fn from_env() -> Result<Self> {
        let keep_parens = match env::var("WOLFRAM_KEEP_PARENS") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                WolframError::Config(format!(
                    "WOLFRAM_KEEP_PARENS must be a boolean, got {value:?}"
                ))
            })?,
            Err(_) => false,
        };
        Ok(Self { keep_parens })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Wolfram|Alpha app id (secret)
    pub app_id: SecretString,

    /// API base URL, without a trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: SecretString::new(app_id),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `WOLFRAM_APP_ID`, `WOLFRAM_BASE_URL` and `WOLFRAM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let app_id = env::var("WOLFRAM_APP_ID")
            .map_err(|_| WolframError::Config("WOLFRAM_APP_ID not set".into()))?;
        if app_id.trim().is_empty() {
            return Err(WolframError::Config("WOLFRAM_APP_ID is empty".into()));
        }

        let mut config = Self::new(app_id);
        if let Ok(url) = env::var("WOLFRAM_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Ok(secs) = env::var("WOLFRAM_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                WolframError::Config(format!("WOLFRAM_TIMEOUT_SECS must be a number, got {secs:?}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
