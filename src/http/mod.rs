//! HTTP client module
//!
//! Thin wrapper over `reqwest` used by the search client.
//!
//! # Features
//!
//! - **Single attempt**: every failure surfaces to the caller, nothing is retried
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Error mapping**: timeouts, non-2xx statuses and bad JSON get distinct variants

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
