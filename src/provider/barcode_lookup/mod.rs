//! BarcodeLookup.com product data provider implementation.
//!
//! This module queries the barcodelookup.com v3 products endpoint, the
//! paid general catalog tried first in the chain. An API key is required;
//! without one the provider reports `NotFound` for everything and never
//! touches the network.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::errors::ProviderFailure;
use crate::models::{Candidate, ProductInfo, ProviderOutcome, ProviderSource};
use crate::provider::ProductDataProvider;

const BASE_URL: &str = "https://api.barcodelookup.com/v3";
const PROVIDER_ID: &str = "barcodelookup";

/// Response from the /products endpoint
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

/// BarcodeLookup.com product data provider.
pub struct BarcodeLookupProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl BarcodeLookupProvider {
    /// Create a provider. A `None` or empty key leaves it disabled.
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch(
        &self,
        candidate: &Candidate,
        api_key: &str,
        remaining: Duration,
    ) -> Result<ProviderOutcome, ProviderFailure> {
        let url = format!(
            "{}/products?barcode={}&key={}",
            self.base_url,
            candidate.code(),
            urlencoding::encode(api_key)
        );

        let response = self
            .client
            .get(&url)
            .timeout(remaining)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderFailure::Timeout {
                        provider: PROVIDER_ID,
                    }
                } else {
                    ProviderFailure::Network {
                        provider: PROVIDER_ID,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            return Ok(ProviderOutcome::NotFound);
        }
        if !status.is_success() {
            return Err(ProviderFailure::Status {
                provider: PROVIDER_ID,
                status,
            });
        }

        let body: ProductsResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderFailure::Malformed {
                    provider: PROVIDER_ID,
                    message: e.to_string(),
                })?;

        Ok(map_first_product(body, candidate))
    }
}

fn map_first_product(body: ProductsResponse, candidate: &Candidate) -> ProviderOutcome {
    let Some(record) = body.products.into_iter().next() else {
        return ProviderOutcome::NotFound;
    };
    let Some(name) = record.title.filter(|t| !t.trim().is_empty()) else {
        return ProviderOutcome::NotFound;
    };

    ProviderOutcome::Found(ProductInfo {
        name,
        brand: record.brand.filter(|b| !b.trim().is_empty()),
        image_url: record.images.into_iter().find(|i| !i.trim().is_empty()),
        category: record.category.filter(|c| !c.trim().is_empty()),
        source: Some(ProviderSource::BarcodeLookup),
        normalized_barcode: Some(candidate.code().to_string()),
    })
}

#[async_trait]
impl ProductDataProvider for BarcodeLookupProvider {
    fn source(&self) -> ProviderSource {
        ProviderSource::BarcodeLookup
    }

    async fn lookup(&self, candidate: &Candidate, remaining: Duration) -> ProviderOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("{} has no API key configured, skipping", PROVIDER_ID);
            return ProviderOutcome::NotFound;
        };

        match self.fetch(candidate, api_key, remaining).await {
            Ok(outcome) => outcome,
            Err(failure) => ProviderOutcome::Error(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    fn candidate() -> Candidate {
        Candidate::new("036000291452").unwrap()
    }

    fn provider(server: &MockServer, key: Option<&str>) -> BarcodeLookupProvider {
        BarcodeLookupProvider::new(Client::new(), key.map(String::from))
            .with_base_url(server.base_url())
    }

    #[tokio::test]
    async fn maps_a_successful_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/products")
                    .query_param("barcode", "036000291452")
                    .query_param("key", "secret");
                then.status(200).json_body(serde_json::json!({
                    "products": [{
                        "title": "Cheerios Cereal",
                        "brand": "General Mills",
                        "category": "Food > Breakfast",
                        "images": ["https://img.example.com/cheerios.jpg"]
                    }]
                }));
            })
            .await;

        let outcome = provider(&server, Some("secret"))
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        mock.assert_async().await;

        match outcome {
            ProviderOutcome::Found(product) => {
                assert_eq!(product.name, "Cheerios Cereal");
                assert_eq!(product.brand.as_deref(), Some("General Mills"));
                assert_eq!(
                    product.image_url.as_deref(),
                    Some("https://img.example.com/cheerios.jpg")
                );
                assert_eq!(product.category.as_deref(), Some("Food > Breakfast"));
                assert_eq!(product.source, Some(ProviderSource::BarcodeLookup));
                assert_eq!(product.normalized_barcode.as_deref(), Some("036000291452"));
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn not_found_status_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(404);
            })
            .await;

        let outcome = provider(&server, Some("secret"))
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(outcome, ProviderOutcome::NotFound));
    }

    #[tokio::test]
    async fn server_error_is_an_error_outcome() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(500);
            })
            .await;

        let outcome = provider(&server, Some("secret"))
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(
            outcome,
            ProviderOutcome::Error(ProviderFailure::Status { .. })
        ));
    }

    #[tokio::test]
    async fn empty_title_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200)
                    .json_body(serde_json::json!({ "products": [{ "title": "  " }] }));
            })
            .await;

        let outcome = provider(&server, Some("secret"))
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(outcome, ProviderOutcome::NotFound));
    }

    #[tokio::test]
    async fn missing_key_skips_the_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200);
            })
            .await;

        let outcome = provider(&server, None)
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(outcome, ProviderOutcome::NotFound));
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn garbage_body_is_an_error_outcome() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200).body("<html>nope</html>");
            })
            .await;

        let outcome = provider(&server, Some("secret"))
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(
            outcome,
            ProviderOutcome::Error(ProviderFailure::Malformed { .. })
        ));
    }
}
