//! The `min` / `max` rules over numbers and dates.

use chrono::{DateTime, Utc};

use super::{FieldContext, Failure, Limit, RuleEvaluator, limit_failure};
use crate::field::value::{date_view, numeric_view};
use crate::foundation::RuleKind;
use crate::rules::spec::{Bound, resolve_optional};

/// Compares the value against `min` / `max`.
///
/// Numeric-looking values compare as numbers; anything else is read as a
/// date and compared only against text bounds. An unusable number or date
/// on either side never exceeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeRule;

impl RangeRule {
    /// The number to compare: the element's own numeric view when it is
    /// usable, else the coerced field value.
    fn number(field: &FieldContext<'_>, coerced: f64) -> f64 {
        field
            .descriptor()
            .element
            .value_as_number
            .filter(|n| *n != 0.0 && n.is_finite())
            .unwrap_or(coerced)
    }

    fn date(field: &FieldContext<'_>) -> Option<DateTime<Utc>> {
        field
            .descriptor()
            .element
            .value_as_date
            .or_else(|| date_view(field.value()))
    }
}

impl RuleEvaluator for RangeRule {
    fn name(&self) -> &'static str {
        "range"
    }

    fn evaluate(&self, field: &FieldContext<'_>) -> Option<Failure> {
        let rules = field.rules();
        if field.is_empty() || (rules.min.is_none() && rules.max.is_none()) {
            return None;
        }

        let max = resolve_optional(rules.max.as_ref());
        let min = resolve_optional(rules.min.as_ref());

        let (exceeds_max, exceeds_min) = if let Some(coerced) = numeric_view(field.value()) {
            let number = Self::number(field, coerced);
            let above = |bound: &Bound| bound.as_number().is_some_and(|max| number > max);
            let below = |bound: &Bound| bound.as_number().is_some_and(|min| number < min);
            (
                max.value.as_ref().is_some_and(above),
                min.value.as_ref().is_some_and(below),
            )
        } else if let Some(date) = Self::date(field) {
            let above = |bound: &Bound| bound.as_date().is_some_and(|max| date > max);
            let below = |bound: &Bound| bound.as_date().is_some_and(|min| date < min);
            (
                max.value.as_ref().is_some_and(above),
                min.value.as_ref().is_some_and(below),
            )
        } else {
            (false, false)
        };

        limit_failure(
            Limit {
                kind: RuleKind::Max,
                message: max.message,
                exceeded: exceeds_max,
            },
            Limit {
                kind: RuleKind::Min,
                message: min.message,
                exceeded: exceeds_min,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::Target;
    use crate::field::{DefaultGroupResolver, FieldDescriptor, InputElement};
    use crate::rules::FieldRules;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn run(value: impl Into<Value>, rules: FieldRules) -> Option<RuleKind> {
        let field = FieldDescriptor::new("n", value).with_rules(rules);
        RangeRule
            .evaluate(&FieldContext::new(&field, &DefaultGroupResolver))
            .map(|failure| failure.kind)
    }

    fn ten_to_twenty() -> FieldRules {
        FieldRules::new().min(10).max(20)
    }

    #[test]
    fn numeric_bounds() {
        assert_eq!(run(25, ten_to_twenty()), Some(RuleKind::Max));
        assert_eq!(run(5, ten_to_twenty()), Some(RuleKind::Min));
        assert_eq!(run(15, ten_to_twenty()), None);
        assert_eq!(run(20, ten_to_twenty()), None);
    }

    #[test]
    fn numeric_strings_compare_as_numbers() {
        assert_eq!(run("25", ten_to_twenty()), Some(RuleKind::Max));
        assert_eq!(run(" 9 ", ten_to_twenty()), Some(RuleKind::Min));
        assert_eq!(run("12", FieldRules::new().max("11")), Some(RuleKind::Max));
    }

    #[test]
    fn message_and_target() {
        let field = FieldDescriptor::new("age", 3)
            .with_rules(FieldRules::new().min_with_message(18, "adults only"));
        let failure = RangeRule
            .evaluate(&FieldContext::new(&field, &DefaultGroupResolver))
            .unwrap();
        assert_eq!(failure.message, "adults only");
        assert_eq!(failure.target, Target::Element);
    }

    #[test]
    fn booleans_and_unparsable_bounds_never_exceed() {
        assert_eq!(run(true, ten_to_twenty()), None);
        assert_eq!(run(5, FieldRules::new().min("ten")), None);
    }

    #[test]
    fn empty_value_is_skipped() {
        assert_eq!(run("", ten_to_twenty()), None);
        assert_eq!(run(5, FieldRules::new()), None);
    }

    #[test]
    fn element_number_view_takes_priority() {
        let field = FieldDescriptor::new("n", "5")
            .with_element(InputElement::text("n").with_raw_value("5").with_value_as_number(50.0))
            .with_rules(ten_to_twenty());
        let failure = RangeRule.evaluate(&FieldContext::new(&field, &DefaultGroupResolver));
        assert_eq!(failure.map(|f| f.kind), Some(RuleKind::Max));

        let zero_view = FieldDescriptor::new("n", "5")
            .with_element(InputElement::text("n").with_raw_value("5").with_value_as_number(0.0))
            .with_rules(ten_to_twenty());
        let failure = RangeRule.evaluate(&FieldContext::new(&zero_view, &DefaultGroupResolver));
        assert_eq!(failure.map(|f| f.kind), Some(RuleKind::Min));
    }

    #[test]
    fn date_bounds() {
        let rules = FieldRules::new().min("2024-01-01").max("2024-12-31");
        assert_eq!(run("2025-02-01", rules.clone()), Some(RuleKind::Max));
        assert_eq!(run("2023-06-15", rules.clone()), Some(RuleKind::Min));
        assert_eq!(run("2024-06-15", rules.clone()), None);
        assert_eq!(run("not a date", rules), None);
    }

    #[test]
    fn dates_ignore_numeric_bounds() {
        assert_eq!(run("2024-06-15", FieldRules::new().max(1)), None);
    }

    #[test]
    fn element_date_view_takes_priority() {
        let picked = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let field = FieldDescriptor::new("d", "garbage")
            .with_element(InputElement::new("d", crate::field::InputKind::Date).with_value_as_date(picked))
            .with_rules(FieldRules::new().max("2025-01-01"));
        let failure = RangeRule.evaluate(&FieldContext::new(&field, &DefaultGroupResolver));
        assert_eq!(failure.map(|f| f.kind), Some(RuleKind::Max));
    }

    #[test]
    fn single_element_array_is_numeric() {
        assert_eq!(run(json!(["30"]), ten_to_twenty()), Some(RuleKind::Max));
    }
}
