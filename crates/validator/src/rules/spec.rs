//! Rule specifications and the message/value resolver.
//!
//! Every declarative rule accepts either a bare constraint or a
//! `{ value, message }` pair. [`RuleSpec::resolve`] and
//! [`RequiredSpec::resolve`] normalise both shapes into [`Resolved`] before
//! any evaluator looks at them.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::field::value::{coerce_number, parse_date};
use crate::foundation::Message;

// ============================================================================
// RESOLVED
// ============================================================================

/// A rule normalised to `{ value, message }`.
///
/// `value` is `None` when the rule declared no constraint; such rules are
/// skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    /// The constraint, if any.
    pub value: Option<T>,
    /// The message to report on failure (possibly empty).
    pub message: Message,
}

impl<T> Resolved<T> {
    fn absent() -> Self {
        Self {
            value: None,
            message: Message::empty(),
        }
    }
}

// ============================================================================
// RULE SPEC
// ============================================================================

/// A constraint with an optional message.
///
/// Deserializes from either a bare value (`10`) or an object
/// (`{ "value": 10, "message": "too small" }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec<T> {
    /// Constraint paired with a message.
    WithMessage {
        /// The constraint; absent means "skip this rule".
        #[serde(default = "Option::default")]
        value: Option<T>,
        /// Message reported on failure.
        #[serde(default)]
        message: Message,
    },
    /// Bare constraint without a message.
    Value(T),
}

impl<T: Clone> RuleSpec<T> {
    /// Creates a bare constraint.
    pub fn value(value: impl Into<T>) -> Self {
        Self::Value(value.into())
    }

    /// Creates a constraint with a message.
    pub fn with_message(value: impl Into<T>, message: impl Into<Message>) -> Self {
        Self::WithMessage {
            value: Some(value.into()),
            message: message.into(),
        }
    }

    /// Normalises to `{ value, message }`.
    #[must_use]
    pub fn resolve(&self) -> Resolved<T> {
        match self {
            Self::Value(value) => Resolved {
                value: Some(value.clone()),
                message: Message::empty(),
            },
            Self::WithMessage { value, message } => Resolved {
                value: value.clone(),
                message: message.clone(),
            },
        }
    }
}

/// Resolves an optional rule, treating a missing rule as absent.
pub(crate) fn resolve_optional<T: Clone>(spec: Option<&RuleSpec<T>>) -> Resolved<T> {
    spec.map_or_else(Resolved::absent, RuleSpec::resolve)
}

// ============================================================================
// REQUIRED SPEC
// ============================================================================

/// Specification of the `required` rule.
///
/// A bare message means "required, with this message"; a resolved value of
/// `false` disables the rule even when a message is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiredSpec {
    /// `true` / `false`.
    Flag(bool),
    /// Required with a message. An empty message disables the rule.
    Message(Message),
    /// Explicit pair.
    WithMessage {
        /// Whether the rule is active.
        #[serde(default)]
        value: bool,
        /// Message reported on failure.
        #[serde(default)]
        message: Message,
    },
}

impl RequiredSpec {
    /// Creates an explicit `{ value, message }` pair.
    pub fn with_message(value: bool, message: impl Into<Message>) -> Self {
        Self::WithMessage {
            value,
            message: message.into(),
        }
    }

    /// Normalises to `{ value, message }`.
    #[must_use]
    pub fn resolve(&self) -> Resolved<bool> {
        match self {
            Self::Flag(flag) => Resolved {
                value: Some(*flag),
                message: Message::empty(),
            },
            Self::Message(message) => Resolved {
                value: Some(!message.is_empty()),
                message: message.clone(),
            },
            Self::WithMessage { value, message } => Resolved {
                value: Some(*value),
                message: message.clone(),
            },
        }
    }

    /// Returns true when the rule is switched on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.resolve().value.unwrap_or(false)
    }
}

impl From<bool> for RequiredSpec {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&'static str> for RequiredSpec {
    fn from(message: &'static str) -> Self {
        Self::Message(message.into())
    }
}

impl From<String> for RequiredSpec {
    fn from(message: String) -> Self {
        Self::Message(message.into())
    }
}

impl From<Message> for RequiredSpec {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

// ============================================================================
// BOUND
// ============================================================================

/// A `min` / `max` constraint.
///
/// Numbers compare against numeric values. Text is either a numeric string
/// or a date; only text bounds take part in date comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    /// Numeric bound.
    Number(f64),
    /// Date-like or numeric string.
    Text(String),
}

impl Bound {
    /// Numeric interpretation. `None` or NaN never exceeds.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => coerce_number(text),
        }
    }

    /// Date interpretation; only text bounds carry dates.
    #[must_use]
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => parse_date(text),
        }
    }
}

impl From<f64> for Bound {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Bound {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Bound {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Bound {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Bound {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// A regular expression constraint.
///
/// The source is compiled once on construction. A source that does not
/// compile is kept for round-tripping but the rule is then not applicable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compiles `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = Regex::new(&source).ok();
        Self { source, regex }
    }

    /// Wraps an already compiled regex.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            source: regex.as_str().to_owned(),
            regex: Some(regex),
        }
    }

    /// The pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled regex, if the source is well formed.
    #[must_use]
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Returns true when the source compiled.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.regex.is_some()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::from_regex(regex)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_value_resolves_with_empty_message() {
        let resolved = RuleSpec::<usize>::value(3usize).resolve();
        assert_eq!(resolved.value, Some(3));
        assert!(resolved.message.is_empty());
    }

    #[test]
    fn pair_resolves_both_parts() {
        let resolved = RuleSpec::<Bound>::with_message(10, "too small").resolve();
        assert_eq!(resolved.value, Some(Bound::Number(10.0)));
        assert_eq!(resolved.message, "too small");
    }

    #[test]
    fn missing_rule_is_absent() {
        let resolved = resolve_optional::<usize>(None);
        assert_eq!(resolved.value, None);
    }

    #[test]
    fn required_shapes() {
        assert!(RequiredSpec::from(true).is_enabled());
        assert!(!RequiredSpec::from(false).is_enabled());

        let message = RequiredSpec::from("Please fill in").resolve();
        assert_eq!(message.value, Some(true));
        assert_eq!(message.message, "Please fill in");

        assert!(!RequiredSpec::from("").is_enabled());
        assert!(!RequiredSpec::with_message(false, "x").is_enabled());
    }

    #[test]
    fn required_from_json() {
        let flag: RequiredSpec = serde_json::from_str("true").unwrap();
        assert_eq!(flag, RequiredSpec::Flag(true));

        let message: RequiredSpec = serde_json::from_str("\"needed\"").unwrap();
        assert_eq!(message, RequiredSpec::Message("needed".into()));

        let pair: RequiredSpec =
            serde_json::from_str(r#"{ "value": false, "message": "x" }"#).unwrap();
        assert_eq!(pair, RequiredSpec::with_message(false, "x"));
    }

    #[test]
    fn rule_spec_from_json() {
        let bare: RuleSpec<Bound> = serde_json::from_str("10").unwrap();
        assert_eq!(bare, RuleSpec::Value(Bound::Number(10.0)));

        let date: RuleSpec<Bound> = serde_json::from_str("\"2024-01-01\"").unwrap();
        assert_eq!(date, RuleSpec::Value(Bound::Text("2024-01-01".into())));

        let pair: RuleSpec<usize> =
            serde_json::from_str(r#"{ "value": 4, "message": "too long" }"#).unwrap();
        assert_eq!(pair, RuleSpec::with_message(4usize, "too long"));

        let no_value: RuleSpec<usize> =
            serde_json::from_str(r#"{ "message": "orphan" }"#).unwrap();
        assert_eq!(no_value.resolve().value, None);
    }

    #[test]
    fn bound_interpretations() {
        assert_eq!(Bound::from(5).as_number(), Some(5.0));
        assert_eq!(Bound::from("12").as_number(), Some(12.0));
        assert_eq!(Bound::from("2024-01-01").as_number(), None);
        assert!(Bound::from("2024-01-01").as_date().is_some());
        assert!(Bound::from(5).as_date().is_none());
    }

    #[test]
    fn pattern_compiles_once() {
        let pattern = Pattern::new(r"^\d+$");
        assert!(pattern.is_well_formed());
        assert!(pattern.regex().is_some_and(|re| re.is_match("123")));

        let broken = Pattern::new("(unclosed");
        assert!(!broken.is_well_formed());
        assert_eq!(broken.source(), "(unclosed");
    }

    #[test]
    fn pattern_round_trips_as_string() {
        let json = serde_json::to_string(&Pattern::new("^[a-z]+$")).unwrap();
        assert_eq!(json, "\"^[a-z]+$\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert!(back.is_well_formed());
    }
}
