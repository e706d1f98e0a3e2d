//! Product data provider abstractions and implementations.
//!
//! This module contains:
//! - The `ProductDataProvider` trait that all lookup sources implement
//! - The `ProviderChain` that tries sources in a fixed priority order
//! - Concrete adapters (BarcodeLookup, Open Food Facts, UPCitemdb)
//!
//! Providers differ only in endpoint, authentication, and response-shape
//! mapping. None of them throws: every call collapses into the tri-state
//! [`ProviderOutcome`](crate::models::ProviderOutcome), and a provider with
//! missing credentials degrades to an immediate `NotFound` so the chain
//! keeps working with whatever is configured.

mod chain;
mod traits;

pub mod barcode_lookup;
pub mod open_food_facts;
pub mod upcitemdb;

pub use barcode_lookup::BarcodeLookupProvider;
pub use chain::{ChainResolution, ProviderChain};
pub use open_food_facts::OpenFoodFactsProvider;
pub use traits::ProductDataProvider;
pub use upcitemdb::UpcItemDbProvider;
