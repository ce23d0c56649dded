//! Provider query building.
//!
//! Pure functions of the request and configuration: no network, no cache.

use currencyapi_types::Request;

use crate::config::ServiceConfig;

/// currencyapi.com v3 endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Latest,
    Historical,
    Convert,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Latest => "latest",
            Endpoint::Historical => "historical",
            Endpoint::Convert => "convert",
        }
    }
}

/// The outbound call for one request: an endpoint plus ordered parameters.
///
/// Parameters always appear in the order `apikey`, `base_currency`, `value`,
/// `currencies`, `date`, so equal inputs give byte-identical URLs (and so
/// share a cache entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

impl ProviderQuery {
    /// Builds the query for `request`, or `None` if the variant is not one
    /// this provider knows.
    pub fn for_request(request: &Request, config: &ServiceConfig) -> Option<Self> {
        let restricted = config.symbols().map(|symbols| symbols.join(","));

        let (endpoint, value, currencies, date) = match request {
            Request::CurrentRate { .. } => (Endpoint::Latest, None, restricted, None),
            Request::HistoricalRate { date, .. } => {
                (Endpoint::Historical, None, restricted, Some(*date))
            }
            Request::CurrentConversion { amount, quote, .. } => {
                let currencies = conversion_targets(config, quote, restricted);
                let value = amount.normalize().to_string();
                (Endpoint::Convert, Some(value), currencies, None)
            }
            Request::HistoricalConversion {
                amount,
                quote,
                date,
                ..
            } => {
                let currencies = conversion_targets(config, quote, restricted);
                let value = amount.normalize().to_string();
                (Endpoint::Convert, Some(value), currencies, Some(*date))
            }
            _ => return None,
        };

        let mut params = vec![
            ("apikey", config.api_key().to_string()),
            ("base_currency", request.base().to_string()),
        ];
        if let Some(value) = value {
            params.push(("value", value));
        }
        if let Some(currencies) = currencies {
            params.push(("currencies", currencies));
        }
        if let Some(date) = date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }

        Some(Self { endpoint, params })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn is_historical(&self) -> bool {
        self.param("date").is_some()
    }

    pub fn is_conversion(&self) -> bool {
        self.endpoint == Endpoint::Convert
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The query string, RFC 3986 percent-encoded.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full URL under `base_url` (which ends with `/`).
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}?{}", base_url, self.endpoint.path(), self.query_string())
    }
}

/// Multiconversion asks for the whole restriction set (or everything);
/// otherwise only the requested quote.
fn conversion_targets(
    config: &ServiceConfig,
    quote: &str,
    restricted: Option<String>,
) -> Option<String> {
    if config.multiconversion() {
        restricted
    } else {
        Some(quote.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use currencyapi_types::Subscription;
    use rust_decimal_macros::dec;

    const BASE: &str = "https://api.currencyapi.com/v3/";

    fn config() -> ServiceConfig {
        ServiceConfig::new("xxx", Subscription::Paid)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 13).unwrap()
    }

    fn url(request: &Request, config: &ServiceConfig) -> String {
        ProviderQuery::for_request(request, config).unwrap().url(BASE)
    }

    #[test]
    fn test_current_rate_unrestricted() {
        let req = Request::current_rate("EUR", "USD");
        assert_eq!(
            url(&req, &config()),
            "https://api.currencyapi.com/v3/latest?apikey=xxx&base_currency=EUR"
        );
    }

    #[test]
    fn test_current_rate_with_symbols() {
        let config = config().with_symbols(["EUR", "USD"]);
        let req = Request::current_rate("RUB", "EUR");
        assert_eq!(
            url(&req, &config),
            "https://api.currencyapi.com/v3/latest?apikey=xxx&base_currency=RUB&currencies=EUR%2CUSD"
        );
    }

    #[test]
    fn test_historical_rate_adds_date() {
        let req = Request::historical_rate("EUR", "USD", date());
        let query = ProviderQuery::for_request(&req, &config()).unwrap();
        assert_eq!(query.endpoint(), Endpoint::Historical);
        assert!(query.is_historical());
        assert!(!query.is_conversion());
        assert_eq!(
            query.url(BASE),
            "https://api.currencyapi.com/v3/historical?apikey=xxx&base_currency=EUR&date=2025-06-13"
        );
    }

    #[test]
    fn test_conversion_targets_only_quote() {
        let config = config().with_symbols(["USD", "JPY"]);
        let req = Request::current_conversion(dec!(1234.56), "EUR", "TRY");
        assert_eq!(
            url(&req, &config),
            "https://api.currencyapi.com/v3/convert?apikey=xxx&base_currency=EUR&value=1234.56&currencies=TRY"
        );
    }

    #[test]
    fn test_multiconversion_targets_restriction_set() {
        let config = config()
            .with_symbols(["USD", "JPY", "PHP", "BYN"])
            .with_multiconversion(true);
        let req = Request::historical_conversion(dec!(1234.56), "EUR", "TRY", date());
        assert_eq!(
            url(&req, &config),
            "https://api.currencyapi.com/v3/convert?apikey=xxx&base_currency=EUR&value=1234.56&currencies=USD%2CJPY%2CPHP%2CBYN&date=2025-06-13"
        );
    }

    #[test]
    fn test_multiconversion_unrestricted_omits_currencies() {
        let config = config().with_multiconversion(true);
        let req = Request::current_conversion(dec!(1), "EUR", "USD");
        let query = ProviderQuery::for_request(&req, &config).unwrap();
        assert_eq!(query.param("currencies"), None);
        assert_eq!(query.param("value"), Some("1"));
    }

    #[test]
    fn test_multiconversion_same_url_for_different_quotes() {
        let config = config().with_multiconversion(true);
        let a = Request::current_conversion(dec!(10), "EUR", "USD");
        let b = Request::current_conversion(dec!(10), "EUR", "JPY");
        assert_eq!(url(&a, &config), url(&b, &config));
    }

    #[test]
    fn test_amount_scale_does_not_change_url() {
        let a = Request::current_conversion(dec!(1.5), "EUR", "USD");
        let b = Request::current_conversion(dec!(1.50), "EUR", "USD");
        assert_eq!(url(&a, &config()), url(&b, &config()));
        assert!(url(&b, &config()).contains("&value=1.5&"));

        let whole = Request::current_conversion(dec!(100), "EUR", "USD");
        let query = ProviderQuery::for_request(&whole, &config()).unwrap();
        assert_eq!(query.param("value"), Some("100"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let config = ServiceConfig::new("a b&c=d/é", Subscription::Free);
        let req = Request::current_rate("EU R", "USD");
        assert_eq!(
            url(&req, &config),
            "https://api.currencyapi.com/v3/latest?apikey=a%20b%26c%3Dd%2F%C3%A9&base_currency=EU%20R"
        );
    }
}
