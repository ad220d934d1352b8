//! Credential types
//!
//! `CredentialsDef` is the loose, deserializable form found in run files and
//! server requests. `Credentials` is the validated form used for requests.

use crate::error::{Error, Result};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default WeValu API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.wevalu.io";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Credential fields as supplied by a host or a run file
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsDef {
    /// API key (secret)
    #[serde(default, alias = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL of the service
    #[serde(default, alias = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl CredentialsDef {
    /// Fill fields that are unset here from another definition
    #[must_use]
    pub fn or(self, fallback: CredentialsDef) -> Self {
        Self {
            api_key: self.api_key.or(fallback.api_key),
            base_url: self.base_url.or(fallback.base_url),
        }
    }

    /// Validate and convert into [`Credentials`]
    pub fn into_credentials(self) -> Result<Credentials> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::missing_field("api_key"))?;
        Credentials::new(api_key, self.base_url.as_deref())
    }
}

impl std::fmt::Debug for CredentialsDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsDef")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Validated credentials for one invocation
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    base_url: String,
}

impl Credentials {
    /// Create credentials, defaulting and normalizing the base URL
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }

        let base_url = normalize_base_url(base_url);
        Url::parse(&base_url)?;

        Ok(Self { api_key, base_url })
    }

    /// The API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Apply the API key header to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(API_KEY_HEADER, self.api_key.as_str())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Fall back to the default endpoint for a missing or blank URL and strip one
/// trailing slash.
fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.strip_suffix('/').unwrap_or(url).to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
