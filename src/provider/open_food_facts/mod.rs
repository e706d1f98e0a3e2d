//! Open Food Facts product data provider implementation.
//!
//! Queries the world.openfoodfacts.org v2 product endpoint. The API is
//! public and keyless but asks clients to identify themselves with a
//! descriptive User-Agent, which this adapter always sends.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::errors::ProviderFailure;
use crate::models::{Candidate, ProductInfo, ProviderOutcome, ProviderSource};
use crate::provider::ProductDataProvider;

const BASE_URL: &str = "https://world.openfoodfacts.org";
const PROVIDER_ID: &str = "openfoodfacts";

/// Response from /api/v2/product/{code}.json
#[derive(Debug, Deserialize)]
struct ProductResponse {
    /// 1 when the product exists, 0 otherwise
    #[serde(default)]
    status: i64,
    #[serde(default)]
    product: Option<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(default)]
    product_name: Option<String>,
    /// Comma-separated brand list, most prominent first
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    /// Comma-separated category path, general to specific
    #[serde(default)]
    categories: Option<String>,
}

/// Open Food Facts product data provider.
pub struct OpenFoodFactsProvider {
    client: Client,
    user_agent: String,
    base_url: String,
}

impl OpenFoodFactsProvider {
    pub fn new(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
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
        remaining: Duration,
    ) -> Result<ProviderOutcome, ProviderFailure> {
        let url = format!(
            "{}/api/v2/product/{}.json?fields=product_name,brands,image_url,categories",
            self.base_url,
            candidate.code()
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
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

        let body: ProductResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderFailure::Malformed {
                    provider: PROVIDER_ID,
                    message: e.to_string(),
                })?;

        Ok(map_product(body, candidate))
    }
}

fn map_product(body: ProductResponse, candidate: &Candidate) -> ProviderOutcome {
    if body.status != 1 {
        return ProviderOutcome::NotFound;
    }
    let Some(record) = body.product else {
        return ProviderOutcome::NotFound;
    };
    let Some(name) = record
        .product_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
    else {
        return ProviderOutcome::NotFound;
    };

    ProviderOutcome::Found(ProductInfo {
        name,
        brand: first_segment(record.brands.as_deref()),
        image_url: record.image_url.filter(|i| !i.trim().is_empty()),
        category: last_segment(record.categories.as_deref()),
        source: Some(ProviderSource::OpenFoodFacts),
        normalized_barcode: Some(candidate.code().to_string()),
    })
}

/// `brands` lists the most prominent brand first.
fn first_segment(list: Option<&str>) -> Option<String> {
    list?
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from)
}

/// `categories` runs general to specific; the last entry is the most
/// specific one.
fn last_segment(list: Option<&str>) -> Option<String> {
    list?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .next_back()
        .map(String::from)
}

#[async_trait]
impl ProductDataProvider for OpenFoodFactsProvider {
    fn source(&self) -> ProviderSource {
        ProviderSource::OpenFoodFacts
    }

    async fn lookup(&self, candidate: &Candidate, remaining: Duration) -> ProviderOutcome {
        match self.fetch(candidate, remaining).await {
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
        Candidate::new("3017620422003").unwrap()
    }

    fn provider(server: &MockServer) -> OpenFoodFactsProvider {
        OpenFoodFactsProvider::new(Client::new(), "shelfscan-test/0.0")
            .with_base_url(server.base_url())
    }

    #[tokio::test]
    async fn maps_a_successful_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/product/3017620422003.json")
                    .header("user-agent", "shelfscan-test/0.0");
                then.status(200).json_body(serde_json::json!({
                    "status": 1,
                    "product": {
                        "product_name": "Nutella",
                        "brands": "Ferrero, Nutella",
                        "image_url": "https://img.example.com/nutella.jpg",
                        "categories": "Spreads, Sweet spreads, Hazelnut spreads"
                    }
                }));
            })
            .await;

        let outcome = provider(&server)
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        mock.assert_async().await;

        match outcome {
            ProviderOutcome::Found(product) => {
                assert_eq!(product.name, "Nutella");
                assert_eq!(product.brand.as_deref(), Some("Ferrero"));
                assert_eq!(product.category.as_deref(), Some("Hazelnut spreads"));
                assert_eq!(product.source, Some(ProviderSource::OpenFoodFacts));
                assert_eq!(
                    product.normalized_barcode.as_deref(),
                    Some("3017620422003")
                );
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_zero_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/product/3017620422003.json");
                then.status(200)
                    .json_body(serde_json::json!({ "status": 0, "status_verbose": "product not found" }));
            })
            .await;

        let outcome = provider(&server)
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(outcome, ProviderOutcome::NotFound));
    }

    #[tokio::test]
    async fn missing_name_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/product/3017620422003.json");
                then.status(200).json_body(serde_json::json!({
                    "status": 1,
                    "product": { "brands": "Ferrero" }
                }));
            })
            .await;

        let outcome = provider(&server)
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(outcome, ProviderOutcome::NotFound));
    }

    #[tokio::test]
    async fn http_not_found_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/product/3017620422003.json");
                then.status(404);
            })
            .await;

        let outcome = provider(&server)
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(outcome, ProviderOutcome::NotFound));
    }

    #[tokio::test]
    async fn rate_limit_is_an_error_outcome() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/product/3017620422003.json");
                then.status(429);
            })
            .await;

        let outcome = provider(&server)
            .lookup(&candidate(), Duration::from_secs(5))
            .await;
        assert!(matches!(
            outcome,
            ProviderOutcome::Error(ProviderFailure::Status { .. })
        ));
    }

    #[test]
    fn brand_takes_the_first_segment() {
        assert_eq!(
            first_segment(Some("Ferrero, Nutella")).as_deref(),
            Some("Ferrero")
        );
        assert_eq!(first_segment(Some(" , ")), None);
        assert_eq!(first_segment(None), None);
    }

    #[test]
    fn category_takes_the_most_specific_segment() {
        assert_eq!(
            last_segment(Some("Spreads, Sweet spreads, Hazelnut spreads")).as_deref(),
            Some("Hazelnut spreads")
        );
        assert_eq!(last_segment(Some("")), None);
    }
}
