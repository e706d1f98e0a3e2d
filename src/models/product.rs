use serde::{Deserialize, Serialize};

/// External catalog that supplied a product record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSource {
    /// barcodelookup.com (paid, general catalog)
    BarcodeLookup,
    /// world.openfoodfacts.org (free, food-centric)
    OpenFoodFacts,
    /// upcitemdb.com (free trial tier or paid)
    UpcItemDb,
}

impl ProviderSource {
    /// Stable identifier used in logs and the serialized `source` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BarcodeLookup => "barcodelookup",
            Self::OpenFoodFacts => "openfoodfacts",
            Self::UpcItemDb => "upcitemdb",
        }
    }
}

impl std::fmt::Display for ProviderSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive product metadata resolved from a barcode.
///
/// A value of this type always carries a non-empty `name`; lookups that
/// cannot produce one yield no `ProductInfo` at all rather than a partial
/// record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Human-readable product name
    pub name: String,

    /// Brand or manufacturer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Primary product image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Product category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Catalog that supplied this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ProviderSource>,

    /// The normalized candidate string that produced the hit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_barcode: Option<String>,
}

impl ProductInfo {
    /// Create a product record with just a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: None,
            image_url: None,
            category: None,
            source: None,
            normalized_barcode: None,
        }
    }
}
