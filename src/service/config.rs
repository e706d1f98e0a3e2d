//! Process-configuration wiring for the lookup service.

use std::env;

use log::warn;

/// Default User-Agent, sent to catalogs that ask clients to identify
/// themselves.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Credentials and identity settings for the provider chain.
///
/// Every field is optional in effect: a missing credential disables the
/// corresponding provider (it reports `NotFound` for everything) instead
/// of failing assembly. Empty and whitespace-only values count as absent.
#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// API key for barcodelookup.com; absent disables the provider.
    pub barcode_lookup_api_key: Option<String>,
    /// user_key for upcitemdb.com's paid tier; absent falls back to the
    /// public trial tier.
    pub upcitemdb_user_key: Option<String>,
    /// key_type header for upcitemdb.com's paid tier.
    pub upcitemdb_key_type: Option<String>,
    /// User-Agent sent on outbound requests.
    pub user_agent: String,
}

impl LookupConfig {
    /// Read configuration from the process environment.
    ///
    /// Variables: `BARCODE_LOOKUP_API_KEY`, `UPCITEMDB_USER_KEY`,
    /// `UPCITEMDB_KEY_TYPE`, `SHELFSCAN_USER_AGENT`.
    pub fn from_env() -> Self {
        let config = Self {
            barcode_lookup_api_key: non_empty_var("BARCODE_LOOKUP_API_KEY"),
            upcitemdb_user_key: non_empty_var("UPCITEMDB_USER_KEY"),
            upcitemdb_key_type: non_empty_var("UPCITEMDB_KEY_TYPE"),
            user_agent: non_empty_var("SHELFSCAN_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        if config.barcode_lookup_api_key.is_none() {
            warn!("BARCODE_LOOKUP_API_KEY is not set; barcodelookup.com lookups are disabled");
        }
        if config.upcitemdb_user_key.is_none() {
            warn!("UPCITEMDB_USER_KEY is not set; upcitemdb.com will use the trial tier");
        }

        config
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            barcode_lookup_api_key: None,
            upcitemdb_user_key: None,
            upcitemdb_key_type: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_the_crate() {
        assert!(DEFAULT_USER_AGENT.contains('/'));
        assert!(!DEFAULT_USER_AGENT.starts_with('/'));
    }

    #[test]
    fn default_config_has_no_credentials() {
        let config = LookupConfig::default();
        assert!(config.barcode_lookup_api_key.is_none());
        assert!(config.upcitemdb_user_key.is_none());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
