//! Emptiness classification and value coercion.
//!
//! Coercion follows the loose rules form inputs are written against: a
//! string of digits is a number, whitespace counts as zero when deciding
//! numeric-ness, and an unparsable date compares false against everything.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::FieldDescriptor;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Decides whether a field's value counts as absent for rule-skipping.
///
/// A value is empty when the field is numeric-coerced or file-typed and the
/// element's raw value is empty, when it is the empty string, or when it is
/// an empty array. `null` is not empty here; the required rule treats it
/// separately.
#[must_use]
pub fn is_empty(descriptor: &FieldDescriptor) -> bool {
    ((descriptor.value_as_number || descriptor.element.is_file())
        && descriptor.element.raw_value.is_empty())
        || matches!(&descriptor.value, Value::String(s) if s.is_empty())
        || matches!(&descriptor.value, Value::Array(items) if items.is_empty())
}

/// Returns true when the value is `null`.
#[must_use]
pub fn is_absent(value: &Value) -> bool {
    value.is_null()
}

/// Coerces text to a number the way a loose numeric check does.
///
/// Whitespace-only text coerces to zero; `None` means "not a number".
pub(crate) fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    trimmed.parse().ok()
}

/// Numeric view of a field value.
///
/// `None` means the value is not numeric and the date interpretation
/// applies. `Some(NaN)` means numeric-looking but without a usable number
/// (booleans, `null`, blank text); comparisons against it are all false.
pub(crate) fn numeric_view(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            coerce_number(s).map(|_| s.trim().parse::<f64>().unwrap_or(f64::NAN))
        }
        Value::Bool(_) | Value::Null => Some(f64::NAN),
        Value::Array(items) if items.len() == 1 => numeric_view(&items[0]),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a date string.
///
/// Accepts RFC 3339 and ISO-like naive date / date-time forms; naive forms
/// are taken as UTC.
pub(crate) fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Date view of a field value. Only strings carry dates.
pub(crate) fn date_view(value: &Value) -> Option<DateTime<Utc>> {
    value.as_str().and_then(parse_date)
}

/// String length in UTF-16 code units, matching platform string length.
pub(crate) fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::InputElement;
    use serde_json::json;

    #[test]
    fn empty_string_and_array() {
        assert!(is_empty(&FieldDescriptor::new("a", "")));
        assert!(is_empty(&FieldDescriptor::new("a", json!([]))));
        assert!(!is_empty(&FieldDescriptor::new("a", json!(["x"]))));
        assert!(!is_empty(&FieldDescriptor::new("a", "x")));
    }

    #[test]
    fn null_is_not_empty() {
        assert!(!is_empty(&FieldDescriptor::new("a", Value::Null)));
        assert!(is_absent(&Value::Null));
    }

    #[test]
    fn numeric_field_checks_raw_element_value() {
        let field = FieldDescriptor::new("age", json!(0))
            .with_value_as_number(true)
            .with_element(InputElement::text("age"));
        assert!(is_empty(&field));

        let filled = field.with_element(InputElement::text("age").with_raw_value("0"));
        assert!(!is_empty(&filled));
    }

    #[test]
    fn file_field_checks_raw_element_value() {
        let field = FieldDescriptor::new("avatar", json!({})).with_element(InputElement::file("avatar"));
        assert!(is_empty(&field));
    }

    #[test]
    fn coerce_number_rules() {
        assert_eq!(coerce_number(" 12 "), Some(12.0));
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number("   "), Some(0.0));
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number("12a"), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("nan"), None);
        assert_eq!(coerce_number("2024-01-01"), None);
    }

    #[test]
    fn numeric_view_rules() {
        assert_eq!(numeric_view(&json!(5)), Some(5.0));
        assert_eq!(numeric_view(&json!("7.5")), Some(7.5));
        assert_eq!(numeric_view(&json!(["3"])), Some(3.0));
        assert!(numeric_view(&json!(true)).is_some_and(f64::is_nan));
        assert!(numeric_view(&json!("  ")).is_some_and(f64::is_nan));
        assert_eq!(numeric_view(&json!("2024-01-01")), None);
        assert_eq!(numeric_view(&json!({"a": 1})), None);
    }

    #[test]
    fn parse_date_forms() {
        let midnight = parse_date("2024-03-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        let local = parse_date("2024-03-01T10:30").unwrap();
        assert_eq!(local.to_rfc3339(), "2024-03-01T10:30:00+00:00");

        let offset = parse_date("2024-03-01T10:30:00+02:00").unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-03-01T08:30:00+00:00");

        assert!(parse_date("2024-03-01 10:30:15.250").is_some());
        assert!(parse_date("yesterday").is_none());
        assert!(date_view(&json!(20_240_301)).is_none());
    }

    #[test]
    fn utf16_length() {
        assert_eq!(text_length("abc"), 3);
        assert_eq!(text_length("é"), 1);
        assert_eq!(text_length("😀"), 2);
    }
}
