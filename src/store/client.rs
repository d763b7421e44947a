//! HTTP client for the remote catalog endpoint using wreq browser emulation.

use super::error::FetchError;
use super::models::Product;
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching the product list - enables mocking for tests.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches the complete product list in one call.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Catalog HTTP client.
pub struct StoreClient {
    client: Client,
    endpoint: String,
}

impl StoreClient {
    /// Creates a new client for the configured endpoint.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).map_err(FetchError::Client)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    /// Returns the endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "application/json, text/plain, */*")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            if status.as_u16() == 403 || status.as_u16() == 503 {
                warn!("Product source refused the request ({}). Try a proxy.", status);
            }
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Body)
    }
}

#[async_trait]
impl ProductSource for StoreClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        info!("Fetching catalog from {}", self.endpoint);

        let body = self.get(&self.endpoint).await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        debug!("Decoded {} products", products.len());
        Ok(products)
    }
}
