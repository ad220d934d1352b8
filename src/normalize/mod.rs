//! Response normalization
//!
//! The WeValu API wraps its payloads inconsistently: a bare list, a list under
//! `evaluations`, or either of those nested one level under `data`. This module
//! resolves the shape once and flattens it into output records.

mod shape;

pub use shape::{normalize, page_records, unwrap_envelope, ResponseShape};

/// Envelope field wrapping the payload
pub const DATA_FIELD: &str = "data";

/// Field holding the evaluation list
pub const EVALUATIONS_FIELD: &str = "evaluations";
