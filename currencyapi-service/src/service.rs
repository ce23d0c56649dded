//! currencyapi.com Application Service
//!
//! Dispatches provider-agnostic requests to the right endpoint and shapes
//! the outcome into responses. Contains NO transport or storage logic -
//! those come in through the ports.

use async_trait::async_trait;
use currencyapi_types::{
    Cache, ConversionResponse, ExchangeRateResponse, ExchangeRateService, HttpClient, HttpFailure,
    Request, RequestError, RequestFactory, Response, ServiceError,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::config::ServiceConfig;
use crate::fetcher::{Fetched, RateFetcher};
use crate::interpreter::{self, Extracted};
use crate::query::ProviderQuery;

/// What a supported request asks for.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Rate,
    Conversion { amount: Decimal },
}

/// Exchange rate service backed by currencyapi.com.
///
/// Generic over the ports - adapters are injected at construction:
/// - `C: Cache` for provider payloads (use `NullCache` to disable caching)
/// - `H: HttpClient` to reach the provider
/// - `F: RequestFactory` to build outbound requests
///
/// Holds no mutable state of its own; it is as thread-safe as its adapters.
pub struct CurrencyApiService<C, H, F> {
    config: ServiceConfig,
    fetcher: RateFetcher<C, H, F>,
}

impl<C: Cache, H: HttpClient, F: RequestFactory> CurrencyApiService<C, H, F> {
    /// Creates a new service with the given configuration and adapters.
    pub fn new(config: ServiceConfig, cache: C, http: H, factory: F) -> Self {
        let fetcher = RateFetcher::new(cache, http, factory, config.ttl());
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serves one request, with at most one provider call.
    #[instrument(
        skip(self, request),
        fields(kind = %request.kind(), base = request.base(), quote = request.quote())
    )]
    pub async fn send(&self, request: &Request) -> Result<Response, ServiceError> {
        let Some(operation) = self.classify(request) else {
            debug!("request not supported");
            return Ok(RequestError::RequestNotSupported {
                kind: request.kind(),
            }
            .into());
        };
        let Some(query) = ProviderQuery::for_request(request, &self.config) else {
            return Ok(RequestError::RequestNotSupported {
                kind: request.kind(),
            }
            .into());
        };

        let url = query.url(self.config.base_url());
        let payload = match self.fetcher.fetch(&url).await? {
            Fetched::Payload(payload) => payload,
            Fetched::Rejected(failure) => {
                return Ok(not_found(operation, request, Some(failure)).into());
            }
        };

        let response: Response = match interpreter::extract(&payload, request.quote())? {
            None => not_found(operation, request, None).into(),
            Some(Extracted { value, date }) => match operation {
                Operation::Rate => {
                    Response::ExchangeRate(ExchangeRateResponse { rate: value, date })
                }
                Operation::Conversion { .. } => Response::Conversion(ConversionResponse {
                    amount: value,
                    date,
                }),
            },
        };
        Ok(response)
    }

    /// Whether `send` would try to serve `request`. No side effects.
    pub fn supports(&self, request: &Request) -> bool {
        self.classify(request).is_some()
    }

    /// Rates are served on every plan, conversions only on paid ones.
    fn classify(&self, request: &Request) -> Option<Operation> {
        match request {
            Request::CurrentRate { .. } | Request::HistoricalRate { .. } => Some(Operation::Rate),
            Request::CurrentConversion { amount, .. }
            | Request::HistoricalConversion { amount, .. } => self
                .config
                .subscription()
                .allows_conversion()
                .then_some(Operation::Conversion { amount: *amount }),
            _ => None,
        }
    }
}

fn not_found(operation: Operation, request: &Request, cause: Option<HttpFailure>) -> RequestError {
    let base = request.base().to_string();
    let quote = request.quote().to_string();
    let date = request.date();
    match operation {
        Operation::Rate => RequestError::ExchangeRateNotFound {
            base,
            quote,
            date,
            cause,
        },
        Operation::Conversion { amount } => RequestError::ConversionNotPerformed {
            amount,
            base,
            quote,
            date,
            cause,
        },
    }
}

#[async_trait]
impl<C: Cache, H: HttpClient, F: RequestFactory> ExchangeRateService
    for CurrencyApiService<C, H, F>
{
    async fn send(&self, request: &Request) -> Result<Response, ServiceError> {
        CurrencyApiService::send(self, request).await
    }

    fn supports(&self, request: &Request) -> bool {
        CurrencyApiService::supports(self, request)
    }
}
