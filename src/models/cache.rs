use serde::{Deserialize, Serialize};

use super::ProductInfo;

/// The only two shapes ever persisted to the cache store.
///
/// `NotFound` is a sentinel recording a confirmed negative answer, not an
/// error. Provider failures are never written to the cache in any form, so
/// a transient outage cannot calcify into a durable "no such product".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CacheEntry {
    /// A previously resolved product.
    Found { product: ProductInfo },
    /// A confirmed miss across the whole provider chain.
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_round_trips_through_json() {
        let entry = CacheEntry::Found {
            product: ProductInfo::with_name("Widget"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"status\":\"found\""));
        let back: CacheEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn not_found_is_a_tagged_sentinel() {
        let json = serde_json::to_string(&CacheEntry::NotFound).unwrap();
        assert_eq!(json, "{\"status\":\"not_found\"}");
        let back: CacheEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CacheEntry::NotFound);
    }
}
