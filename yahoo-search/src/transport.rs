//! HTTP transport for fetching Yahoo pages
//!
//! The [`Transport`] trait is the seam between the extractors and the
//! network. [`HttpTransport`] is the reqwest-backed implementation used by
//! default; tests and embedders can plug in their own.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::HttpConfig;
use crate::error::TransportError;

/// Trait for page transports
///
/// One call is one GET; implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Get the name of this transport
    fn name(&self) -> &str;

    /// Fetch `url` and return the response body as text
    async fn get(&self, url: &Url) -> Result<String, TransportError>;
}

/// reqwest-backed transport with a configurable timeout and size limit
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    max_response_size: usize,
}

impl HttpTransport {
    /// Create a new HttpTransport with the given configuration
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            max_response_size: config.max_response_size,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn get(&self, url: &Url) -> Result<String, TransportError> {
        tracing::debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Check Content-Length before downloading
        if let Some(len) = response.content_length() {
            if len as usize > self.max_response_size {
                return Err(TransportError::TooLarge {
                    size: len as usize,
                    max: self.max_response_size,
                });
            }
        }

        let content = response.text().await?;

        if content.len() > self.max_response_size {
            return Err(TransportError::TooLarge {
                size: content.len(),
                max: self.max_response_size,
            });
        }

        tracing::debug!(%url, status = status.as_u16(), bytes = content.len(), "fetched");
        Ok(content)
    }
}
