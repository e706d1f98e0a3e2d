//! UPCitemdb product data provider implementation.
//!
//! Queries the upcitemdb.com lookup endpoint. Without credentials the
//! public trial tier is used; with a `user_key` the paid endpoint is
//! queried instead, authenticated through the `user_key` and `key_type`
//! headers (`key_type` defaults to `3scale`).
//!
//! Note: the trial tier is limited to 100 lookups per day per IP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::errors::ProviderFailure;
use crate::models::{Candidate, ProductInfo, ProviderOutcome, ProviderSource};
use crate::provider::ProductDataProvider;

const BASE_URL: &str = "https://api.upcitemdb.com";
const PROVIDER_ID: &str = "upcitemdb";
const DEFAULT_KEY_TYPE: &str = "3scale";

/// Response from the lookup endpoint
#[derive(Debug, Deserialize)]
struct LookupResponse {
    /// "OK" on success; error codes otherwise
    #[serde(default)]
    code: String,
    #[serde(default)]
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

/// UPCitemdb product data provider.
pub struct UpcItemDbProvider {
    client: Client,
    user_key: Option<String>,
    key_type: String,
    base_url: String,
}

impl UpcItemDbProvider {
    /// Create a provider. Without a `user_key` the trial endpoint is used.
    pub fn new(client: Client, user_key: Option<String>, key_type: Option<String>) -> Self {
        Self {
            client,
            user_key: user_key.filter(|k| !k.is_empty()),
            key_type: key_type
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| DEFAULT_KEY_TYPE.to_string()),
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
        let mut request = match self.user_key.as_deref() {
            Some(user_key) => self
                .client
                .get(format!("{}/prod/v1/lookup", self.base_url))
                .header("user_key", user_key)
                .header("key_type", self.key_type.as_str()),
            None => self.client.get(format!("{}/prod/trial/lookup", self.base_url)),
        };
        request = request
            .query(&[("upc", candidate.code())])
            .timeout(remaining);

        let response = request.send().await.map_err(|e| {
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

        let body: LookupResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderFailure::Malformed {
                    provider: PROVIDER_ID,
                    message: e.to_string(),
                })?;

        Ok(map_first_item(body, candidate))
    }
}

fn map_first_item(body: LookupResponse, candidate: &Candidate) -> ProviderOutcome {
    if body.code != "OK" {
        return ProviderOutcome::NotFound;
    }
    let Some(record) = body.items.into_iter().next() else {
        return ProviderOutcome::NotFound;
    };
    let Some(name) = record
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
    else {
        return ProviderOutcome::NotFound;
    };

    ProviderOutcome::Found(ProductInfo {
        name,
        brand: record.brand.filter(|b| !b.trim().is_empty()),
        image_url: record.images.into_iter().find(|i| !i.trim().is_empty()),
        category: record.category.filter(|c| !c.trim().is_empty()),
        source: Some(ProviderSource::UpcItemDb),
        normalized_barcode: Some(candidate.code().to_string()),
    })
}

#[async_trait]
impl ProductDataProvider for UpcItemDbProvider {
    fn source(&self) -> ProviderSource {
        ProviderSource::UpcItemDb
    }

    async fn lookup(&self, candidate: &Candidate, remaining: Duration) -> ProviderOutcome {
        match self.fetch(candidate, remaining).await {
            Ok(outcome) => outcome,
            Err(failure) => ProviderOutcome::Error(failure),
        }
    }
}
