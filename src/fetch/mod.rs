//! HTTP fetching module.
//!
//! - Shared, pooled HTTP client with browser-like headers
//! - Best-effort HEAD probe followed by the GET
//! - Status and content-type validation
//! - Retry with exponential backoff

pub mod client;
pub mod error;
pub mod retry;

pub use client::{FetchedImage, ImageFetcher};
pub use error::FetchFailure;
pub use retry::RetryPolicy;
