//! Provider-agnostic exchange rate and conversion requests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request for a rate or a converted amount.
///
/// Currencies are ISO 4217-style codes as the caller supplied them; no
/// validation happens here, the provider decides what it knows.
///
/// The enum is `#[non_exhaustive]`: services outside this crate must treat
/// variants they do not recognise as unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Request {
    CurrentRate {
        base: String,
        quote: String,
    },
    HistoricalRate {
        base: String,
        quote: String,
        date: NaiveDate,
    },
    CurrentConversion {
        amount: Decimal,
        base: String,
        quote: String,
    },
    HistoricalConversion {
        amount: Decimal,
        base: String,
        quote: String,
        date: NaiveDate,
    },
}

impl Request {
    pub fn current_rate(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Request::CurrentRate {
            base: base.into(),
            quote: quote.into(),
        }
    }

    pub fn historical_rate(
        base: impl Into<String>,
        quote: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Request::HistoricalRate {
            base: base.into(),
            quote: quote.into(),
            date,
        }
    }

    pub fn current_conversion(
        amount: Decimal,
        base: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Request::CurrentConversion {
            amount,
            base: base.into(),
            quote: quote.into(),
        }
    }

    pub fn historical_conversion(
        amount: Decimal,
        base: impl Into<String>,
        quote: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Request::HistoricalConversion {
            amount,
            base: base.into(),
            quote: quote.into(),
            date,
        }
    }

    /// The currency being converted from / quoted against.
    pub fn base(&self) -> &str {
        match self {
            Request::CurrentRate { base, .. }
            | Request::HistoricalRate { base, .. }
            | Request::CurrentConversion { base, .. }
            | Request::HistoricalConversion { base, .. } => base,
        }
    }

    /// The currency being converted to / priced.
    pub fn quote(&self) -> &str {
        match self {
            Request::CurrentRate { quote, .. }
            | Request::HistoricalRate { quote, .. }
            | Request::CurrentConversion { quote, .. }
            | Request::HistoricalConversion { quote, .. } => quote,
        }
    }

    /// The requested date, `None` for current requests.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Request::HistoricalRate { date, .. } | Request::HistoricalConversion { date, .. } => {
                Some(*date)
            }
            Request::CurrentRate { .. } | Request::CurrentConversion { .. } => None,
        }
    }

    /// The amount to convert, `None` for rate requests.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Request::CurrentConversion { amount, .. }
            | Request::HistoricalConversion { amount, .. } => Some(*amount),
            Request::CurrentRate { .. } | Request::HistoricalRate { .. } => None,
        }
    }

    pub fn is_conversion(&self) -> bool {
        self.amount().is_some()
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            Request::CurrentRate { .. } => RequestKind::CurrentExchangeRate,
            Request::HistoricalRate { .. } => RequestKind::HistoricalExchangeRate,
            Request::CurrentConversion { .. } => RequestKind::CurrentConversion,
            Request::HistoricalConversion { .. } => RequestKind::HistoricalConversion,
        }
    }
}

/// Discriminant of a [`Request`], used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    CurrentExchangeRate,
    HistoricalExchangeRate,
    CurrentConversion,
    HistoricalConversion,
}

impl RequestKind {
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::CurrentExchangeRate => "CurrentExchangeRateRequest",
            RequestKind::HistoricalExchangeRate => "HistoricalExchangeRateRequest",
            RequestKind::CurrentConversion => "CurrentConversionRequest",
            RequestKind::HistoricalConversion => "HistoricalConversionRequest",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
