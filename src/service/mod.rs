//! The public lookup surface: candidate generation, cache probing, and the
//! provider chain composed into one deadline-bounded resolution call.

mod config;

pub use config::{LookupConfig, DEFAULT_USER_AGENT};

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::budget::{DeadlineBudget, DEFAULT_TIMEOUT_MS};
use crate::cache::{CacheGateway, CacheStore, MemoryCacheStore};
use crate::gtin::candidates_for;
use crate::models::{CacheEntry, Candidate, ProductInfo};
use crate::provider::{
    BarcodeLookupProvider, OpenFoodFactsProvider, ProductDataProvider, ProviderChain,
    UpcItemDbProvider,
};

/// How long a resolved product stays cached.
const FOUND_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// How long a confirmed miss stays cached. Deliberately short so a product
/// that enters the catalogs later is picked up within the hour.
const NOT_FOUND_TTL: Duration = Duration::from_secs(60 * 60);

/// Per-call options for [`ProductLookupService::lookup_product_by_barcode`].
#[derive(Clone, Copy, Debug)]
pub struct LookupOptions {
    /// End-to-end time budget for the whole lookup, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Resolves scanned barcodes into product metadata.
///
/// One instance is meant to be shared across the application (it holds a
/// connection-pooling HTTP client); every lookup call is independent and
/// holds no state beyond its own deadline budget.
pub struct ProductLookupService {
    cache: CacheGateway,
    chain: ProviderChain,
}

impl ProductLookupService {
    /// Full dependency injection: bring your own store and providers.
    pub fn new(store: Arc<dyn CacheStore>, providers: Vec<Arc<dyn ProductDataProvider>>) -> Self {
        Self {
            cache: CacheGateway::new(store),
            chain: ProviderChain::new(providers),
        }
    }

    /// Assemble the default chain from `config`, backed by `store`.
    ///
    /// Chain order is fixed: the paid general catalog first, then the
    /// free/public catalogs.
    pub fn with_config(config: LookupConfig, store: Arc<dyn CacheStore>) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|_| Client::new());

        let providers: Vec<Arc<dyn ProductDataProvider>> = vec![
            Arc::new(BarcodeLookupProvider::new(
                client.clone(),
                config.barcode_lookup_api_key,
            )),
            Arc::new(OpenFoodFactsProvider::new(
                client.clone(),
                config.user_agent.clone(),
            )),
            Arc::new(UpcItemDbProvider::new(
                client,
                config.upcitemdb_user_key,
                config.upcitemdb_key_type,
            )),
        ];

        Self::new(store, providers)
    }

    /// Assemble from the process environment with an in-process cache.
    pub fn from_env() -> Self {
        Self::with_config(LookupConfig::from_env(), Arc::new(MemoryCacheStore::new()))
    }

    /// Resolve a raw scanned or typed barcode into product metadata.
    ///
    /// Returns `None` when the input yields no usable identifier, when no
    /// source knows the product, or when the time budget runs out first.
    /// This call never fails: cache and provider problems degrade to a
    /// `None` and a log line.
    pub async fn lookup_product_by_barcode(
        &self,
        raw: &str,
        options: LookupOptions,
    ) -> Option<ProductInfo> {
        let budget = DeadlineBudget::start_ms(options.timeout_ms);

        let candidates = candidates_for(raw);
        if candidates.is_empty() {
            debug!("no usable identifier in scan input {:?}", raw);
            return None;
        }

        // Cache pass over every candidate before any provider is asked: a
        // different representation of the same product may already be
        // cached. A stored NotFound is not final here, later candidates
        // may still hit.
        for candidate in &candidates {
            if budget.is_exhausted() {
                debug!("budget exhausted during cache probes for {:?}", raw);
                return None;
            }
            match self.cache.get(&cache_key(candidate), &budget).await {
                Some(CacheEntry::Found { product }) if !product.name.is_empty() => {
                    debug!("cache hit for {}", candidate);
                    return Some(product);
                }
                _ => {}
            }
        }

        // Provider pass, one candidate at a time.
        for candidate in &candidates {
            if budget.is_exhausted() {
                debug!("budget exhausted during provider probes for {:?}", raw);
                return None;
            }

            let resolution = self.chain.resolve(candidate, &budget).await;

            if let Some(product) = resolution.product {
                self.cache
                    .set(
                        &cache_key(candidate),
                        &CacheEntry::Found {
                            product: product.clone(),
                        },
                        FOUND_TTL,
                        &budget,
                    )
                    .await;
                return Some(product);
            }

            // Only an authoritative miss may be remembered. An errored or
            // deadline-cut pass must stay uncached, or a transient outage
            // would read as "no such product" until the TTL expires.
            if !resolution.had_error {
                self.cache
                    .set(
                        &cache_key(candidate),
                        &CacheEntry::NotFound,
                        NOT_FOUND_TTL,
                        &budget,
                    )
                    .await;
            }
        }

        None
    }
}

fn cache_key(candidate: &Candidate) -> String {
    format!("product:{}", candidate.code())
}
