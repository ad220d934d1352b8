//! Credentials module
//!
//! Holds the API key and base URL used to reach the WeValu service, and
//! applies the key to outgoing requests as an `X-API-Key` header.

mod types;

pub use types::{Credentials, CredentialsDef, API_KEY_HEADER, DEFAULT_BASE_URL};
