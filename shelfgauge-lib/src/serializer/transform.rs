use super::Json;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const LOG_TARGET: &str = "serializer";

/// Largest magnitude below which every integral `f64` is exactly representable as `i64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::StringTransform {}
    impl Sealed for super::BooleanTransform {}
    impl Sealed for super::NumberTransform {}
    impl Sealed for super::DateTransform {}
    impl<T> Sealed for super::super::ObjectSerializer<T> {}
    impl<T> Sealed for super::super::ArraySerializer<T> {}
}

/// Bidirectional conversion between one field value and its JSON representation.
///
/// The implementers are fixed: the four primitive transforms in this module plus
/// [`ObjectSerializer`](super::ObjectSerializer) and [`ArraySerializer`](super::ArraySerializer).
pub trait Transform: sealed::Sealed + Send + Sync {
    type Value;

    /// Convert a field value to JSON.
    fn serialize(&self, value: &Self::Value) -> Json;

    /// Convert a JSON value to a field value.
    ///
    /// Returns `None` when the input has no sensible interpretation for this
    /// transform, in which case the field is left unset.
    fn deserialize(&self, json: &Json) -> Option<Self::Value>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringTransform;

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanTransform;

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberTransform;

#[derive(Debug, Clone, Copy, Default)]
pub struct DateTransform;

pub const STRING: StringTransform = StringTransform;
pub const BOOLEAN: BooleanTransform = BooleanTransform;
pub const NUMBER: NumberTransform = NumberTransform;
pub const DATE: DateTransform = DateTransform;

impl Transform for StringTransform {
    type Value = String;

    fn serialize(&self, value: &String) -> Json {
        Json::String(value.clone())
    }

    fn deserialize(&self, json: &Json) -> Option<String> {
        Some(match json {
            Json::String(s) => s.clone(),
            Json::Bool(b) => b.to_string(),
            Json::Number(n) => n.to_string(),
            Json::Null => "null".to_string(),
            Json::Array(_) | Json::Object(_) => json.to_string(),
        })
    }
}

impl Transform for BooleanTransform {
    type Value = bool;

    fn serialize(&self, value: &bool) -> Json {
        Json::Bool(*value)
    }

    fn deserialize(&self, json: &Json) -> Option<bool> {
        Some(match json {
            Json::Bool(b) => *b,
            Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Json::String(s) => !s.is_empty(),
            Json::Null => false,
            Json::Array(_) | Json::Object(_) => true,
        })
    }
}

impl Transform for NumberTransform {
    type Value = f64;

    fn serialize(&self, value: &f64) -> Json {
        number_to_json(*value)
    }

    fn deserialize(&self, json: &Json) -> Option<f64> {
        Some(match json {
            Json::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Json::Bool(b) => f64::from(u8::from(*b)),
            Json::String(s) => parse_number(s),
            Json::Null => 0.0,
            Json::Array(_) | Json::Object(_) => f64::NAN,
        })
    }
}

impl Transform for DateTransform {
    type Value = DateTime<Utc>;

    fn serialize(&self, value: &DateTime<Utc>) -> Json {
        Json::String(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    fn deserialize(&self, json: &Json) -> Option<DateTime<Utc>> {
        let parsed = match json {
            Json::String(s) => parse_date(s),
            Json::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
            _ => None,
        };

        if parsed.is_none() {
            log::trace!(target: LOG_TARGET, "Ignoring unparseable date value {json}");
        }

        parsed
    }
}

/// Integral values are written as JSON integers; `NaN` and infinities have no JSON form and become `null`.
#[expect(clippy::cast_possible_truncation, reason = "integral and within the exactly representable range")]
fn number_to_json(value: f64) -> Json {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Json::from(value as i64);
    }

    serde_json::Number::from_f64(value).map_or(Json::Null, Json::Number)
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
