//! Fallible field access on provider JSON.
//!
//! Every accessor returns `Ok(None)` for a missing (or `null`) field and
//! `Err` for a field that is present with the wrong shape.

use std::str::FromStr;

use currencyapi_types::ServiceError;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
#[error("field `{field}` is not {expected}")]
pub(crate) struct ShapeError {
    field: String,
    expected: &'static str,
}

impl ShapeError {
    fn new(field: &str, expected: &'static str) -> Self {
        Self {
            field: field.to_string(),
            expected,
        }
    }
}

impl From<ShapeError> for ServiceError {
    fn from(err: ShapeError) -> Self {
        ServiceError::UnexpectedResponse(err.to_string())
    }
}

pub(crate) trait JsonExt {
    fn get_object(&self, key: &str) -> Result<Option<&Map<String, Value>>, ShapeError>;
    fn get_string(&self, key: &str) -> Result<Option<&str>, ShapeError>;
    /// A JSON number, or a string holding one (plain or scientific notation).
    fn get_decimal(&self, key: &str) -> Result<Option<Decimal>, ShapeError>;
}

impl JsonExt for Map<String, Value> {
    fn get_object(&self, key: &str) -> Result<Option<&Map<String, Value>>, ShapeError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(ShapeError::new(key, "an object")),
        }
    }

    fn get_string(&self, key: &str) -> Result<Option<&str>, ShapeError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ShapeError::new(key, "a string")),
        }
    }

    fn get_decimal(&self, key: &str) -> Result<Option<Decimal>, ShapeError> {
        let text = match self.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(_) => return Err(ShapeError::new(key, "a number")),
        };
        parse_decimal(&text)
            .map(Some)
            .ok_or_else(|| ShapeError::new(key, "a decimal number"))
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
