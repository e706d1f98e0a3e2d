//! Provider chain - ordered fallback across lookup sources.
//!
//! The chain is consulted once per candidate. Providers are tried strictly
//! in priority order (paid general catalog first, then the free/public
//! catalogs); there is no concurrent fan-out, so total latency stays
//! bounded by the caller's deadline.

use std::sync::Arc;

use log::{debug, warn};

use crate::budget::DeadlineBudget;
use crate::models::{Candidate, ProductInfo, ProviderOutcome};
use crate::provider::ProductDataProvider;

/// What one pass over the chain produced for one candidate.
#[derive(Debug)]
pub struct ChainResolution {
    /// The first `Found` product, if any provider produced one.
    pub product: Option<ProductInfo>,
    /// Whether any provider call errored or the deadline ran out before
    /// every provider could answer. When set, a miss is not authoritative
    /// and must not be cached negatively.
    pub had_error: bool,
}

/// Ordered collection of lookup sources.
pub struct ProviderChain {
    providers: Vec<Arc<dyn ProductDataProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn ProductDataProvider>>) -> Self {
        Self { providers }
    }

    /// Try every provider for `candidate`, in order, within `budget`.
    ///
    /// The remaining budget is recomputed immediately before each provider
    /// call; once it reaches zero the whole loop aborts with
    /// `had_error = true`, because deadline exhaustion must never read as
    /// a confirmed negative. The first `Found` outcome wins.
    pub async fn resolve(
        &self,
        candidate: &Candidate,
        budget: &DeadlineBudget,
    ) -> ChainResolution {
        let mut had_error = false;

        for provider in &self.providers {
            let remaining = budget.remaining();
            if remaining.is_zero() {
                debug!(
                    "deadline exhausted before '{}' could be asked about {}",
                    provider.source(),
                    candidate
                );
                return ChainResolution {
                    product: None,
                    had_error: true,
                };
            }

            match provider.lookup(candidate, remaining).await {
                ProviderOutcome::Found(product) => {
                    debug!("'{}' resolved {}", provider.source(), candidate);
                    return ChainResolution {
                        product: Some(product),
                        had_error,
                    };
                }
                ProviderOutcome::NotFound => {
                    debug!(
                        "'{}' has no record of {}, trying next",
                        provider.source(),
                        candidate
                    );
                }
                ProviderOutcome::Error(failure) => {
                    warn!(
                        "'{}' failed for {}: {}, trying next",
                        provider.source(),
                        candidate,
                        failure
                    );
                    had_error = true;
                }
            }
        }

        ChainResolution {
            product: None,
            had_error,
        }
    }
}
