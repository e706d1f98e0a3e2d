//! Error types for the product lookup crate.
//!
//! All errors here are internal: the public lookup surface degrades every
//! failure to an absent result instead of propagating it. [`ProviderFailure`]
//! travels inside [`ProviderOutcome::Error`](crate::models::ProviderOutcome)
//! and feeds the cache-write policy; [`CacheError`] is what a cache backend
//! may report before the gateway swallows it.

use reqwest::StatusCode;
use thiserror::Error;

/// A provider call that could not produce an authoritative answer.
#[derive(Error, Debug)]
pub enum ProviderFailure {
    /// The request did not complete within the remaining time budget.
    #[error("timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: &'static str,
    },

    /// The request failed at the transport level.
    #[error("network error: {provider} - {message}")]
    Network {
        /// The provider that could not be reached
        provider: &'static str,
        /// The underlying transport error message
        message: String,
    },

    /// The provider answered with a status that is neither success nor a
    /// plain "no such product".
    #[error("unexpected status: {provider} - {status}")]
    Status {
        /// The provider that returned the status
        provider: &'static str,
        /// The HTTP status received
        status: StatusCode,
    },

    /// The provider answered successfully but the body could not be decoded.
    #[error("malformed response: {provider} - {message}")]
    Malformed {
        /// The provider that returned the body
        provider: &'static str,
        /// Description of the decoding failure
        message: String,
    },
}

/// An error reported by a cache backend.
///
/// The gateway treats any of these as a cache miss (reads) or a skipped
/// write; they never abort a lookup.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store failed the operation.
    #[error("cache backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_failure_display() {
        let failure = ProviderFailure::Timeout {
            provider: "barcodelookup",
        };
        assert_eq!(format!("{}", failure), "timeout: barcodelookup");

        let failure = ProviderFailure::Status {
            provider: "upcitemdb",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            format!("{}", failure),
            "unexpected status: upcitemdb - 500 Internal Server Error"
        );
    }

    #[test]
    fn cache_error_display() {
        let err = CacheError::Backend("connection refused".to_string());
        assert_eq!(format!("{}", err), "cache backend error: connection refused");
    }
}
