//! HTTP client module
//!
//! A thin reqwest wrapper: base URL resolution, default headers, credential
//! application and uniform mapping of failures. Every request is a single
//! attempt; there is no retry or backoff.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
