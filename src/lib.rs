// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # WeValu Node
//!
//! A workflow integration node for the WeValu employee evaluation service.
//! Each input item triggers one read operation against the REST API and the
//! results are emitted as flat JSON records.
//!
//! ## Features
//!
//! - **List evaluations**: one bounded page, or every page in batches of 100
//! - **Summary statistics**: aggregate counts and averages per iteration
//! - **Envelope tolerance**: bare lists, `{data: ...}` and `{evaluations: [...]}`
//!   all yield the same records
//! - **Continue on failure**: failing items become `{error, itemIndex}` records
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wevalu_node::{Credentials, EvaluationFetcher, EvaluationOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new("my-api-key", None)?;
//!     let fetcher = EvaluationFetcher::new(credentials)?;
//!
//!     let options = EvaluationOptions::new().department("d-1");
//!     let records = fetcher.fetch_all(&options).await?;
//!     println!("{} evaluations", records.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │   Node executor: per item → resource/operation dispatch  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────┬──────────────┴──┬──────────────┬───────────┐
//! │ Credentials │     Fetcher     │  Pagination  │ Normalize │
//! ├─────────────┼─────────────────┼──────────────┼───────────┤
//! │ X-API-Key   │ page / all      │ limit+offset │ envelopes │
//! │ base URL    │ summary         │ short page   │ shapes    │
//! └─────────────┴─────────────────┴──────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the node
pub mod error;

/// Common types and type aliases
pub mod types;

/// API key credentials
pub mod credentials;

/// HTTP client
pub mod http;

/// Offset pagination
pub mod pagination;

/// Response envelope handling
pub mod normalize;

/// Typed views of evaluation and summary records
pub mod model;

/// Evaluation and summary fetchers
pub mod fetcher;

/// Node executor
pub mod node;

/// Run file configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use credentials::{Credentials, CredentialsDef};
pub use fetcher::{EvaluationFetcher, EvaluationOptions, FetcherConfig};
pub use node::{ExecuteContext, NodeItem, NodeParameters, StaticContext, WeValuNode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
