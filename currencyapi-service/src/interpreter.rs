//! Response interpretation.
//!
//! Payload shape:
//! `{ "meta": { "last_updated_at": "..." }, "data": { "<CODE>": { "value": <number> } } }`

use chrono::{DateTime, NaiveDate};
use currencyapi_types::ServiceError;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::payload::JsonExt;

/// A value found in a payload, with the date it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub value: Decimal,
    pub date: NaiveDate,
}

/// Looks up `data[quote].value` and `meta.last_updated_at`.
///
/// A missing value is `Ok(None)`. A found value without a usable timestamp
/// is a protocol violation.
pub fn extract(payload: &Value, quote: &str) -> Result<Option<Extracted>, ServiceError> {
    let root = payload.as_object().ok_or_else(|| {
        ServiceError::UnexpectedResponse("payload is not a JSON object".to_string())
    })?;

    // An empty collection may be serialized as `[]` instead of `{}`.
    let data = match root.get("data") {
        Some(Value::Array(items)) if items.is_empty() => None,
        _ => root.get_object("data")?,
    };
    let Some(data) = data else {
        return Ok(None);
    };
    let Some(entry) = data.get_object(quote)? else {
        return Ok(None);
    };
    let Some(value) = entry.get_decimal("value")? else {
        return Ok(None);
    };

    let updated_at = match root.get_object("meta")? {
        Some(meta) => meta.get_string("last_updated_at")?,
        None => None,
    }
    .ok_or_else(|| ServiceError::UnexpectedResponse("last_updated_at missing".to_string()))?;

    let date = parse_date(updated_at).ok_or_else(|| {
        ServiceError::UnexpectedResponse(format!("unparsable last_updated_at: {}", updated_at))
    })?;

    Ok(Some(Extracted { value, date }))
}

/// Calendar date written in a provider timestamp.
///
/// RFC 3339 first; otherwise anything starting with `YYYY-MM-DD`.
fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.date_naive());
    }
    timestamp
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_extracts_value_and_date() {
        let payload = json!({
            "meta": {"last_updated_at": "2025-07-28T12:00:00Z"},
            "data": {"USD": {"code": "USD", "value": "1.1625"}}
        });
        let found = extract(&payload, "USD").unwrap().unwrap();
        assert_eq!(found.value, dec!(1.1625));
        assert_eq!(found.date, ymd(2025, 7, 28));
    }

    #[test]
    fn test_missing_quote_is_not_found() {
        let payload = json!({
            "meta": {"last_updated_at": "2025-07-28T12:00:00Z"},
            "data": {"USD": {"value": 1.16}}
        });
        assert_eq!(extract(&payload, "RUB").unwrap(), None);
    }

    #[test]
    fn test_null_value_is_not_found() {
        let payload = json!({"data": {"USD": {"value": null}}});
        assert_eq!(extract(&payload, "USD").unwrap(), None);
    }

    #[test]
    fn test_missing_data_is_not_found() {
        let payload = json!({"meta": {"last_updated_at": "2025-07-28T12:00:00Z"}});
        assert_eq!(extract(&payload, "USD").unwrap(), None);
    }

    #[test]
    fn test_empty_data_array_is_not_found() {
        let payload = json!({"meta": {"last_updated_at": "2025-07-28T12:00:00Z"}, "data": []});
        assert_eq!(extract(&payload, "USD").unwrap(), None);

        let payload = json!({"meta": {"last_updated_at": "2025-07-28T12:00:00Z"}, "data": [1]});
        assert!(extract(&payload, "USD").is_err());
    }

    #[test]
    fn test_missing_timestamp_is_fault() {
        let payload = json!({"data": {"USD": {"value": 1.16}}});
        let err = extract(&payload, "USD").unwrap_err();
        assert!(matches!(err, ServiceError::UnexpectedResponse(msg) if msg == "last_updated_at missing"));
    }

    #[test]
    fn test_wrong_shaped_value_is_fault() {
        let payload = json!({
            "meta": {"last_updated_at": "2025-07-28T12:00:00Z"},
            "data": {"USD": {"value": {"amount": 1}}}
        });
        assert!(matches!(
            extract(&payload, "USD"),
            Err(ServiceError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_non_object_payload_is_fault() {
        assert!(extract(&json!([1, 2]), "USD").is_err());
    }

    #[test]
    fn test_date_keeps_written_calendar_day() {
        assert_eq!(parse_date("2025-06-13T23:59:59+05:00"), Some(ymd(2025, 6, 13)));
        assert_eq!(parse_date("2025-06-13T23:59:59"), Some(ymd(2025, 6, 13)));
        assert_eq!(parse_date("2025-06-13"), Some(ymd(2025, 6, 13)));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_unparsable_timestamp_is_fault() {
        let payload = json!({
            "meta": {"last_updated_at": "not a date"},
            "data": {"USD": {"value": 1.16}}
        });
        assert!(extract(&payload, "USD").is_err());
    }
}
