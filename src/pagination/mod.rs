//! Pagination module
//!
//! Offset/limit pagination for the evaluations listing. The service exposes
//! no continuation token or total count, so a page shorter than the batch
//! size is the only end-of-data signal.

mod offset;
mod types;

pub use offset::OffsetPaginator;
pub use types::{NextPage, PaginationState};
