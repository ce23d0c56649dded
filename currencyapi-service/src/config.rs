//! Adapter configuration.

use std::fmt;
use std::time::Duration;

use currencyapi_types::Subscription;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.currencyapi.com/v3/";

/// How long a provider payload stays cached by default.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Immutable adapter settings, shared by every call.
#[derive(Clone)]
pub struct ServiceConfig {
    api_key: String,
    subscription: Subscription,
    symbols: Option<Vec<String>>,
    multiconversion: bool,
    ttl: Duration,
    base_url: String,
}

impl ServiceConfig {
    pub fn new(api_key: impl Into<String>, subscription: Subscription) -> Self {
        Self {
            api_key: api_key.into(),
            subscription,
            symbols: None,
            multiconversion: false,
            ttl: DEFAULT_TTL,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Restricts requested quote currencies to `symbols`.
    ///
    /// Order is kept and duplicates are dropped. An empty list means
    /// unrestricted.
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        self.symbols = if unique.is_empty() { None } else { Some(unique) };
        self
    }

    /// Requests the whole restriction set (or every currency) on each
    /// conversion so later conversions from the same base hit the cache.
    pub fn with_multiconversion(mut self, multiconversion: bool) -> Self {
        self.multiconversion = multiconversion;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Overrides the API root, e.g. for a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = format!("{}/", base_url.trim_end_matches('/'));
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    pub fn symbols(&self) -> Option<&[String]> {
        self.symbols.as_deref()
    }

    pub fn multiconversion(&self) -> bool {
        self.multiconversion
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"***")
            .field("subscription", &self.subscription)
            .field("symbols", &self.symbols)
            .field("multiconversion", &self.multiconversion)
            .field("ttl", &self.ttl)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::new("key", Subscription::Free);
        assert_eq!(config.symbols(), None);
        assert!(!config.multiconversion());
        assert_eq!(config.ttl(), Duration::from_secs(3600));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_symbols_keep_order_and_drop_duplicates() {
        let config =
            ServiceConfig::new("key", Subscription::Free).with_symbols(["USD", "JPY", "USD", "PHP"]);
        assert_eq!(
            config.symbols(),
            Some(&["USD".to_string(), "JPY".to_string(), "PHP".to_string()][..])
        );
    }

    #[test]
    fn test_empty_symbols_mean_unrestricted() {
        let config = ServiceConfig::new("key", Subscription::Free).with_symbols(Vec::<String>::new());
        assert_eq!(config.symbols(), None);
    }

    #[test]
    fn test_base_url_gets_single_trailing_slash() {
        let config = ServiceConfig::new("key", Subscription::Free).with_base_url("http://localhost:8080/v3//");
        assert_eq!(config.base_url(), "http://localhost:8080/v3/");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ServiceConfig::new("sk_live_secret", Subscription::Paid);
        assert!(!format!("{:?}", config).contains("sk_live_secret"));
    }
}
