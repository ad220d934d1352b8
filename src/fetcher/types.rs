//! Fetcher configuration and query filter

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Filters for the evaluations listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationOptions {
    /// Department identifier; empty means no filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    /// Iteration number; zero means no filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<i64>,
    /// Number of evaluations to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl EvaluationOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by department
    #[must_use]
    pub fn department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    /// Filter by iteration
    #[must_use]
    pub fn iteration(mut self, iteration: i64) -> Self {
        self.iteration = Some(iteration);
        self
    }

    /// Skip the first `offset` evaluations
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Settings for an [`EvaluationFetcher`](super::EvaluationFetcher)
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Cap on pages fetched by `fetch_all`; `None` trusts the service to end
    pub max_pages: Option<u32>,
    /// User agent string
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_pages: None,
            user_agent: format!("wevalu-node/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetcherConfig {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap the number of pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }
}
