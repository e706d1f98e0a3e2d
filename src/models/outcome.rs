use crate::errors::ProviderFailure;

use super::ProductInfo;

/// Result of one provider call for one candidate.
///
/// The `NotFound`/`Error` distinction is load-bearing: only a confirmed
/// `NotFound` across the whole chain may be cached negatively. Collapsing
/// the two into an `Option` would lose the "was this absent, or did we fail
/// to find out" information the cache-write policy depends on.
#[derive(Debug)]
pub enum ProviderOutcome {
    /// The provider returned a record with a usable product name.
    Found(ProductInfo),
    /// The provider answered authoritatively that it has no such product,
    /// or is not configured and therefore can never answer.
    NotFound,
    /// The provider could not be consulted: network failure, timeout,
    /// unexpected status, or an unparsable body.
    Error(ProviderFailure),
}

impl ProviderOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
