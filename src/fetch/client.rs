//! Image fetching over HTTP.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};

use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetch::error::{body_snippet, FetchFailure};
use crate::fetch::retry::{is_retryable_error, RetryPolicy};
use crate::fs::with_content_type_extension;
use crate::manifest::WorkItem;

/// A successfully fetched image.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Where the bytes should go, extension resolved.
    pub output_path: PathBuf,

    /// Content-Type header as received.
    pub content_type: String,

    /// Response body.
    pub bytes: Vec<u8>,
}

/// HTTP client for image downloads.
///
/// One instance is shared by the whole run so connections are pooled.
pub struct ImageFetcher {
    client: Client,
    config: FetchConfig,
    policy: RetryPolicy,
}

impl ImageFetcher {
    /// Create a fetcher from fetch settings.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            policy: RetryPolicy::from_config(config),
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Build the request headers for an item.
    fn build_headers(&self, referer: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(header::USER_AGENT, header_value(&self.config.user_agent));
        headers.insert(header::ACCEPT, header_value(&self.config.accept));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header_value(&self.config.accept_language),
        );
        headers.insert(header::REFERER, header_value(referer));

        headers
    }

    /// Send a request, retrying retryable statuses and transport errors.
    ///
    /// Once attempts are exhausted the last response is returned whatever its
    /// status; only a final transport error is returned as `Err`.
    pub async fn send_with_retry(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        timeout: Duration,
    ) -> reqwest::Result<Response> {
        let mut attempt = 1;

        loop {
            let result = self
                .client
                .request(method.clone(), url)
                .headers(headers.clone())
                .timeout(timeout)
                .send()
                .await;

            let delay = match result {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if !self.policy.has_attempts_left(attempt)
                        || !self.policy.should_retry_status(status)
                    {
                        return Ok(response);
                    }

                    let retry_after = response
                        .headers()
                        .get(header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned);
                    drop(response);

                    tracing::debug!(
                        "{} {} returned {} (attempt {}/{})",
                        method,
                        url,
                        status,
                        attempt,
                        self.policy.max_attempts()
                    );
                    self.policy
                        .delay_for_status(attempt, status, retry_after.as_deref())
                }
                Err(err) => {
                    if !self.policy.has_attempts_left(attempt) || !is_retryable_error(&err) {
                        return Err(err);
                    }

                    tracing::debug!(
                        "{} {} failed: {} (attempt {}/{})",
                        method,
                        url,
                        err,
                        attempt,
                        self.policy.max_attempts()
                    );
                    self.policy.backoff(attempt)
                }
            };

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// Fetch one item and validate that it is an image.
    pub async fn fetch(&self, item: &WorkItem) -> std::result::Result<FetchedImage, FetchFailure> {
        let headers = self.build_headers(&item.referer);

        // Pre-flight HEAD. Its outcome is intentionally unused: some servers
        // only serve the GET to clients that probed first.
        if let Err(err) = self
            .send_with_retry(Method::HEAD, &item.url, &headers, self.config.head_timeout())
            .await
        {
            tracing::debug!("HEAD {} failed (ignored): {}", item.url, err);
        }

        let response = self
            .send_with_retry(Method::GET, &item.url, &headers, self.config.get_timeout())
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.to_ascii_lowercase().starts_with("image/") {
            let body = response.bytes().await.unwrap_or_default();
            return Err(FetchFailure::NotAnImage {
                content_type,
                snippet: body_snippet(&body),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        let output_path = with_content_type_extension(&item.output_path, &content_type);

        Ok(FetchedImage {
            output_path,
            content_type,
            bytes,
        })
    }
}

/// Header value from arbitrary text; invalid values degrade to empty.
fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| {
        tracing::warn!("Dropping invalid header value: {:?}", value);
        HeaderValue::from_static("")
    })
}
