//! Product data provider trait definition.

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{Candidate, ProviderOutcome, ProviderSource};

/// Trait for external product lookup sources.
///
/// Implement this trait to add support for a new catalog. The chain holds
/// an ordered collection of this trait, not concrete types.
///
/// Implementations must:
/// - return `NotFound` immediately when unconfigured (missing credentials
///   are an operational state, not an error);
/// - treat "no such product" and "bad request" HTTP statuses as `NotFound`;
/// - treat any other non-success status, transport failure, or unparsable
///   body as `Error`;
/// - require a non-empty product name before reporting `Found` (an HTTP
///   success carrying no usable name is a `NotFound`);
/// - bound their own network call by `remaining` and report overruns as a
///   timeout `Error`.
#[async_trait]
pub trait ProductDataProvider: Send + Sync {
    /// Which catalog this adapter fronts; also its log identity.
    fn source(&self) -> ProviderSource;

    /// Look one candidate up, spending at most `remaining`.
    async fn lookup(&self, candidate: &Candidate, remaining: Duration) -> ProviderOutcome;
}
