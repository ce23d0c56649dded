//! currencyapi.com subscription tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier of the configured API key.
///
/// The `convert` endpoint is only available on paid plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    #[default]
    Free,
    Paid,
}

impl Subscription {
    pub fn allows_conversion(&self) -> bool {
        matches!(self, Subscription::Paid)
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subscription::Free => f.write_str("free"),
            Subscription::Paid => f.write_str("paid"),
        }
    }
}

impl FromStr for Subscription {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Subscription::Free),
            "paid" => Ok(Subscription::Paid),
            _ => Err(format!("Unknown subscription: {}", s)),
        }
    }
}
