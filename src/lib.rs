//! Shelfscan Product Lookup Crate
//!
//! This crate resolves scanned or typed UPC/EAN/GTIN identifiers into
//! descriptive product metadata for inventory onboarding.
//!
//! # Overview
//!
//! The lookup engine supports:
//! - Normalization of one scan into every equivalent representation
//!   (UPC-A, EAN-13, GTIN-14 unwrapping, UPC-E expansion)
//! - A TTL cache consulted before any network traffic
//! - An ordered chain of external catalogs with graceful degradation
//! - A single deadline budget threaded through every operation
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    Raw scan      | --> |    Candidates    |  (normalized variants)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   CacheGateway   |  (budget-bounded probe)
//!                          +------------------+
//!                                  |  miss
//!                                  v
//!                          +------------------+
//!                          |  ProviderChain   |  (ordered catalogs)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   ProductInfo    |  (or nothing at all)
//!                          +------------------+
//! ```
//!
//! Every cache and provider operation races against the remaining slice of
//! one [`DeadlineBudget`] captured at the start of the call; nothing in the
//! engine throws, and a transient failure anywhere is never allowed to be
//! cached as a durable "no such product".
//!
//! # Core Types
//!
//! - [`ProductLookupService`] - the public entry point
//! - [`Candidate`] - one normalized identifier representation
//! - [`ProductInfo`] - resolved product metadata
//! - [`ProviderOutcome`] - tri-state result of one provider call
//! - [`CacheEntry`] - the only shapes ever persisted to the cache
//! - [`DeadlineBudget`] - the shared absolute deadline

pub mod budget;
pub mod cache;
pub mod errors;
pub mod gtin;
pub mod models;
pub mod provider;
pub mod service;

// Re-export the model types
pub use models::{Candidate, CacheEntry, GtinLength, ProductInfo, ProviderOutcome, ProviderSource};

// Re-export the normalization helpers
pub use gtin::{candidates_for, compute_check_digit, expand_upc_e, is_valid_gtin};

// Re-export the budget
pub use budget::{DeadlineBudget, DEFAULT_TIMEOUT_MS};

// Re-export the cache layer
pub use cache::{CacheGateway, CacheStore, MemoryCacheStore};

// Re-export the provider layer
pub use provider::{
    BarcodeLookupProvider, ChainResolution, OpenFoodFactsProvider, ProductDataProvider,
    ProviderChain, UpcItemDbProvider,
};

// Re-export the service surface
pub use service::{LookupConfig, LookupOptions, ProductLookupService, DEFAULT_USER_AGENT};
