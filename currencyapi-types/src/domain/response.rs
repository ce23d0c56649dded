//! Responses returned by an exchange rate service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::RequestError;

/// A rate for one unit of the base currency, as of `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRateResponse {
    pub rate: Decimal,
    pub date: NaiveDate,
}

/// A converted amount in the quote currency, as of `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResponse {
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// A predictable failure returned as a normal value.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(serialize_with = "serialize_error")]
    pub error: RequestError,
}

impl ErrorResponse {
    pub fn new(error: RequestError) -> Self {
        Self { error }
    }
}

impl From<RequestError> for ErrorResponse {
    fn from(error: RequestError) -> Self {
        Self::new(error)
    }
}

fn serialize_error<S: serde::Serializer>(err: &RequestError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&err.to_string())
}

/// Outcome of a successfully dispatched request.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    ExchangeRate(ExchangeRateResponse),
    Conversion(ConversionResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }

    pub fn as_error(&self) -> Option<&RequestError> {
        match self {
            Response::Error(resp) => Some(&resp.error),
            _ => None,
        }
    }
}

impl From<RequestError> for Response {
    fn from(error: RequestError) -> Self {
        Response::Error(ErrorResponse::new(error))
    }
}
