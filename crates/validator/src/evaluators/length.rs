//! The `minLength` / `maxLength` rules.

use super::{FieldContext, Failure, Limit, RuleEvaluator, limit_failure};
use crate::field::value::text_length;
use crate::foundation::RuleKind;
use crate::rules::spec::resolve_optional;

/// Compares the length of a non-empty string value against its bounds.
///
/// Length is counted in UTF-16 code units.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthRule;

impl RuleEvaluator for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn evaluate(&self, field: &FieldContext<'_>) -> Option<Failure> {
        let rules = field.rules();
        if rules.min_length.is_none() && rules.max_length.is_none() {
            return None;
        }
        let text = field.non_empty_text()?;

        let max = resolve_optional(rules.max_length.as_ref());
        let min = resolve_optional(rules.min_length.as_ref());
        let length = text_length(text);

        limit_failure(
            Limit {
                kind: RuleKind::MaxLength,
                message: max.message,
                exceeded: max.value.is_some_and(|max| length > max),
            },
            Limit {
                kind: RuleKind::MinLength,
                message: min.message,
                exceeded: min.value.is_some_and(|min| length < min),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DefaultGroupResolver, FieldDescriptor};
    use crate::rules::FieldRules;
    use serde_json::{Value, json};

    fn run(value: impl Into<Value>, rules: FieldRules) -> Option<Failure> {
        let field = FieldDescriptor::new("s", value).with_rules(rules);
        LengthRule.evaluate(&FieldContext::new(&field, &DefaultGroupResolver))
    }

    fn two_to_four() -> FieldRules {
        FieldRules::new().min_length(2).max_length(4)
    }

    #[test]
    fn length_bounds() {
        assert_eq!(run("a", two_to_four()).map(|f| f.kind), Some(RuleKind::MinLength));
        assert_eq!(run("abcde", two_to_four()).map(|f| f.kind), Some(RuleKind::MaxLength));
        assert!(run("abc", two_to_four()).is_none());
        assert!(run("ab", two_to_four()).is_none());
        assert!(run("abcd", two_to_four()).is_none());
    }

    #[test]
    fn message_is_carried() {
        let failure = run(
            "too long",
            FieldRules::new().max_length_with_message(3, "three at most"),
        )
        .unwrap();
        assert_eq!(failure.message, "three at most");
    }

    #[test]
    fn counts_utf16_units() {
        assert!(run("ééé", FieldRules::new().max_length(3)).is_none());
        assert_eq!(
            run("😀😀", FieldRules::new().max_length(3)).map(|f| f.kind),
            Some(RuleKind::MaxLength)
        );
    }

    #[test]
    fn non_strings_and_empty_are_skipped() {
        assert!(run("", two_to_four()).is_none());
        assert!(run(123_456, two_to_four()).is_none());
        assert!(run(json!(["a", "b", "c", "d", "e"]), two_to_four()).is_none());
        assert!(run("abcdef", FieldRules::new()).is_none());
    }
}
