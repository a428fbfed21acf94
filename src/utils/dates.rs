//! Module for lenient date coercion.
//!
//! Registry records arrive with heterogeneous date representations: empty
//! strings from cleared form fields, plain `YYYY-MM-DD` strings, ISO-8601
//! datetimes with or without a trailing zone marker, or no value at all.
//! Everything normalizes to `Option<NaiveDate>`. Unparseable input is treated
//! as absent rather than rejected so that partial data entry is never
//! blocked; no timezone conversion is performed.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Parse a date string with multiple format attempts
///
/// Returns `None` for empty or unrecognized input. A non-empty string that
/// fails every format is logged as a warning so data-entry problems remain
/// visible to operators.
#[must_use]
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Plain date form (YYYY-MM-DD)
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // ISO-8601 datetime without a zone marker (YYYY-MM-DDTHH:MM:SS)
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }

    // ISO-8601 datetime with a trailing zone marker; the wall-clock date is
    // kept as-is, comparisons in this crate are naive throughout.
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.naive_local().date());
    }

    log::warn!("unparseable date string treated as absent: {trimmed:?}");
    None
}

/// Coerce a raw JSON value into a comparable date, or `None`
///
/// `Null` and the empty string both normalize to `None`; so does any string
/// no format attempt recognizes.
#[must_use]
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_string(s),
        _ => None,
    }
}

/// Serde adapter for record date fields
///
/// Deserializes with the same soft-fail policy as [`parse_date_string`] and
/// serializes back to the plain `YYYY-MM-DD` form.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(super::coerce_date))
    }

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde adapter for numeric fields that may arrive as strings
///
/// Cleared form inputs submit the empty string for numeric fields as well;
/// it normalizes to `None`, and numeric strings are parsed.
pub mod lenient_f64 {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde adapter for integer fields that may arrive as strings
pub mod lenient_i32 {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn serialize<S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_i32(*v),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date_string("2022-01-10"),
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
    }

    #[test]
    fn test_parse_iso_datetime() {
        assert_eq!(
            parse_date_string("2022-01-10T00:00:00"),
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
    }

    #[test]
    fn test_parse_iso_datetime_with_zone_marker() {
        assert_eq!(
            parse_date_string("2022-01-10T12:30:00Z"),
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
        assert_eq!(
            parse_date_string("2022-01-10T12:30:00+03:00"),
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
    }

    #[test]
    fn test_empty_and_garbage_are_absent() {
        assert_eq!(parse_date_string(""), None);
        assert_eq!(parse_date_string("   "), None);
        assert_eq!(parse_date_string("not-a-date"), None);
        assert_eq!(parse_date_string("2022-13-40"), None);
    }

    #[test]
    fn test_coerce_date_values() {
        assert_eq!(
            coerce_date(&json!("2022-03-01")),
            NaiveDate::from_ymd_opt(2022, 3, 1)
        );
        assert_eq!(coerce_date(&json!("")), None);
        assert_eq!(coerce_date(&Value::Null), None);
        assert_eq!(coerce_date(&json!(42)), None);
    }
}
