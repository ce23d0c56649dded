//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use currencyapi_service::ServiceConfig;
use currencyapi_service::config::DEFAULT_TTL;
use currencyapi_types::Subscription;

/// Adapter configuration read from `CURRENCYAPI_*` variables.
pub struct Config {
    pub api_key: String,
    pub subscription: Subscription,
    pub symbols: Vec<String>,
    pub multiconversion: bool,
    pub cache_ttl: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("CURRENCYAPI_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("CURRENCYAPI_KEY environment variable is required"))?;

        let subscription = match lookup("CURRENCYAPI_SUBSCRIPTION") {
            Some(value) => value
                .parse::<Subscription>()
                .map_err(|e| anyhow::anyhow!(e))?,
            None => Subscription::default(),
        };

        let symbols = lookup("CURRENCYAPI_SYMBOLS")
            .map(|list| {
                list.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let multiconversion = match lookup("CURRENCYAPI_MULTICONVERSION") {
            Some(value) => parse_flag(&value)?,
            None => false,
        };

        let cache_ttl = match lookup("CURRENCYAPI_CACHE_TTL_SECS") {
            Some(value) => Duration::from_secs(value.trim().parse()?),
            None => DEFAULT_TTL,
        };

        Ok(Self {
            api_key,
            subscription,
            symbols,
            multiconversion,
            cache_ttl,
        })
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::new(self.api_key.clone(), self.subscription)
            .with_symbols(self.symbols.iter().cloned())
            .with_multiconversion(self.multiconversion)
            .with_ttl(self.cache_ttl)
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("CURRENCYAPI_MULTICONVERSION: not a boolean: {}", other),
    }
}
