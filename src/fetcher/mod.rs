//! Evaluation fetcher
//!
//! Talks to the WeValu integration endpoints:
//! - `GET /api/integrations/evaluations` (paged listing)
//! - `GET /api/integrations/evaluations/summary`
//!
//! Every request is a single attempt. Failures are wrapped into
//! [`Error::Api`] carrying the upstream message.

mod types;

pub use types::{EvaluationOptions, FetcherConfig};

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::normalize::{page_records, unwrap_envelope};
use crate::pagination::{NextPage, OffsetPaginator, PaginationState};
use crate::types::{JsonValue, QueryParams};
use tracing::{debug, info};

/// Page size used when fetching the full collection
pub const BATCH_SIZE: u32 = 100;

/// Default page size for a single bounded fetch
pub const DEFAULT_LIMIT: u32 = 50;

/// Evaluations listing endpoint
pub const EVALUATIONS_PATH: &str = "/api/integrations/evaluations";

/// Summary statistics endpoint
pub const SUMMARY_PATH: &str = "/api/integrations/evaluations/summary";

/// Fetches evaluation records and summaries
#[derive(Debug)]
pub struct EvaluationFetcher {
    client: HttpClient,
    max_pages: Option<u32>,
}

impl EvaluationFetcher {
    /// Create a fetcher with default settings
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, &FetcherConfig::default())
    }

    /// Create a fetcher with custom settings
    pub fn with_config(credentials: Credentials, config: &FetcherConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build();
        let client = HttpClient::with_credentials(http_config, credentials)?;

        Ok(Self {
            client,
            max_pages: config.max_pages,
        })
    }

    /// Fetch one page of evaluations.
    ///
    /// Returns the response body with one level of `data` nesting removed.
    pub async fn fetch_page(&self, options: &EvaluationOptions, limit: u32) -> Result<JsonValue> {
        let offset = options.offset.unwrap_or(0);
        let query = build_query(options, limit, offset);

        let body = self.get(EVALUATIONS_PATH, query).await?;
        Ok(unwrap_envelope(body))
    }

    /// Fetch every evaluation matching `options`, page by page.
    ///
    /// Continues only while a page holds exactly [`BATCH_SIZE`] records, so a
    /// short page or an oversized one ends the walk.
    /// Any failure discards the pages gathered so far.
    pub async fn fetch_all(&self, options: &EvaluationOptions) -> Result<Vec<JsonValue>> {
        let paginator = OffsetPaginator::new(BATCH_SIZE).with_max_pages(self.max_pages);
        let mut state = PaginationState::starting_at(options.offset.unwrap_or(0));
        let mut records = Vec::new();

        loop {
            let mut query = paginator.params(&state);
            query.extend(filter_params(options));
            let body = self.get(EVALUATIONS_PATH, query).await?;

            let page = page_records(body);
            let count = page.len();
            debug!(offset = state.offset, count, "Fetched evaluations page");
            records.extend(page);

            match paginator.process_page(count, &mut state) {
                NextPage::Continue { .. } => {}
                NextPage::Done => break,
                NextPage::LimitReached { max_pages } => {
                    return Err(Error::PaginationLimit { max_pages });
                }
            }
        }

        info!(
            pages = state.pages,
            records = records.len(),
            "Fetched all evaluations"
        );
        Ok(records)
    }

    /// Fetch summary statistics, with the `data` envelope removed
    pub async fn fetch_summary(&self) -> Result<JsonValue> {
        let body = self.get(SUMMARY_PATH, QueryParams::new()).await?;
        Ok(unwrap_envelope(body))
    }

    async fn get(&self, path: &str, query: QueryParams) -> Result<JsonValue> {
        self.client
            .get_json_with_config(path, RequestConfig::new().queries(query))
            .await
            .map_err(Error::remote)
    }
}

/// Build the listing query for a single page: `limit`, `offset`, then the filters
pub fn build_query(options: &EvaluationOptions, limit: u32, offset: u64) -> QueryParams {
    let mut params = OffsetPaginator::new(limit).params(&PaginationState::starting_at(offset));
    params.extend(filter_params(options));
    params
}

/// Filter parameters.
///
/// `departmentId` is sent only when non-empty and `iteration` only when
/// non-zero; both pass through verbatim.
pub fn filter_params(options: &EvaluationOptions) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(department_id) = options.department_id.as_deref().filter(|d| !d.is_empty()) {
        params.push(("departmentId".to_string(), department_id.to_string()));
    }

    if let Some(iteration) = options.iteration.filter(|i| *i != 0) {
        params.push(("iteration".to_string(), iteration.to_string()));
    }

    params
}
