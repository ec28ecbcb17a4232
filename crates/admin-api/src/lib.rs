//! Back-office API client for Signage Studio
//!
//! The website's content and settings live behind an external REST API; this
//! crate is the typed HTTP client the admin editor talks to. It provides the
//! request/response plumbing, error classification, retry with exponential
//! backoff, and the theme endpoints.

#![warn(clippy::all)]

pub mod client;

pub use client::{network_retry, retry, ApiClient, ApiConfig, ApiError, RetryConfig};
