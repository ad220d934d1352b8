//! Run file configuration
//!
//! A run file describes one node invocation for the CLI: credentials, node
//! parameters, how many input items to feed, and HTTP settings.
//!
//! ```yaml
//! credentials:
//!   api_key: "..."
//! parameters:
//!   operation: getAll
//!   returnAll: true
//!   options:
//!     departmentId: "d-1"
//! items: 1
//! continue_on_fail: false
//! http:
//!   timeout_secs: 30
//!   max_pages: 500
//! ```

use crate::credentials::CredentialsDef;
use crate::error::{Error, Result};
use crate::fetcher::FetcherConfig;
use crate::node::{NodeParameters, StaticContext};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One node invocation loaded from YAML or JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Credentials (the API key may come from the environment instead)
    #[serde(default)]
    pub credentials: CredentialsDef,

    /// Node parameters
    #[serde(default)]
    pub parameters: NodeParameters,

    /// Number of input items
    #[serde(default = "default_items")]
    pub items: usize,

    /// Emit error records instead of aborting
    #[serde(default)]
    pub continue_on_fail: bool,

    /// HTTP settings
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_items() -> usize {
    1
}

/// HTTP settings of a run file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page cap for full fetches
    #[serde(default)]
    pub max_pages: Option<u32>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_pages: None,
        }
    }
}

impl RunConfig {
    /// Parse a YAML run file
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON run file
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Fetcher settings
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::new()
            .with_timeout(Duration::from_secs(self.http.timeout_secs))
            .with_max_pages(self.http.max_pages)
    }

    /// Execution context for the node
    pub fn context(&self) -> StaticContext {
        StaticContext::new(self.parameters.clone())
            .with_items(self.items)
            .with_continue_on_fail(self.continue_on_fail)
    }
}

/// Load a run file; `.json` files are parsed as JSON, everything else as YAML
pub fn load_run_config(path: impl AsRef<Path>) -> Result<RunConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read run file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        RunConfig::from_json_str(&content)
    } else {
        RunConfig::from_yaml_str(&content)
    }
}
