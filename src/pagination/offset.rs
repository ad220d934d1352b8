//! Offset-based pagination
//!
//! `?offset=0&limit=100`, then `?offset=100&limit=100`, ... for as long as a
//! page returns exactly `limit` records.

use super::types::{NextPage, PaginationState};
use crate::types::QueryParams;

/// Offset paginator with a fixed page size
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for offset
    pub offset_param: String,
    /// Query parameter name for limit
    pub limit_param: String,
    /// Number of records per page
    pub limit_value: u32,
    /// Optional cap on the number of pages
    pub max_pages: Option<u32>,
}

impl OffsetPaginator {
    /// Create a paginator using the `offset` and `limit` parameters
    pub fn new(limit_value: u32) -> Self {
        Self {
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
            limit_value,
            max_pages: None,
        }
    }

    /// Cap the number of pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Query parameters for the page at the current state
    pub fn params(&self, state: &PaginationState) -> QueryParams {
        vec![
            (self.limit_param.clone(), self.limit_value.to_string()),
            (self.offset_param.clone(), state.offset.to_string()),
        ]
    }

    /// Record a page of `records_count` records and decide what comes next
    pub fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_page(records_count as u64);

        // Only an exactly full page means there may be more
        if records_count != self.limit_value as usize {
            state.mark_done();
            return NextPage::Done;
        }

        if let Some(max_pages) = self.max_pages {
            if state.pages >= max_pages {
                state.mark_done();
                return NextPage::LimitReached { max_pages };
            }
        }

        state.add_offset(u64::from(self.limit_value));
        NextPage::Continue {
            offset: state.offset,
        }
    }
}
