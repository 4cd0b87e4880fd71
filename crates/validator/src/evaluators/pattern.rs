//! The `pattern` rule.

use tracing::warn;

use super::{FieldContext, Failure, RuleEvaluator, Target};
use crate::foundation::RuleKind;

/// Fails when a non-empty string value does not match the pattern.
///
/// Matching is an unanchored search; anchor the pattern to match the whole
/// value. A pattern whose source does not compile is not applicable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRule;

impl RuleEvaluator for PatternRule {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn evaluate(&self, field: &FieldContext<'_>) -> Option<Failure> {
        let spec = field.rules().pattern.as_ref()?;
        let text = field.non_empty_text()?;
        let resolved = spec.resolve();
        let pattern = resolved.value?;

        let Some(regex) = pattern.regex() else {
            warn!(
                field = %field.descriptor().name,
                pattern = pattern.source(),
                "pattern does not compile, rule skipped"
            );
            return None;
        };

        (!regex.is_match(text))
            .then(|| Failure::new(RuleKind::Pattern, resolved.message, Target::Element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DefaultGroupResolver, FieldDescriptor};
    use crate::rules::FieldRules;
    use serde_json::Value;

    fn run(value: impl Into<Value>, rules: FieldRules) -> Option<Failure> {
        let field = FieldDescriptor::new("p", value).with_rules(rules);
        PatternRule.evaluate(&FieldContext::new(&field, &DefaultGroupResolver))
    }

    #[test]
    fn digits_only() {
        let rules = FieldRules::new().pattern_with_message(r"^\d+$", "digits only");
        assert!(run("123", rules.clone()).is_none());

        let failure = run("12a", rules).unwrap();
        assert_eq!(failure.kind, RuleKind::Pattern);
        assert_eq!(failure.message, "digits only");
    }

    #[test]
    fn unanchored_search() {
        assert!(run("abc123", FieldRules::new().pattern(r"\d")).is_none());
    }

    #[test]
    fn malformed_pattern_is_not_applicable() {
        assert!(run("anything", FieldRules::new().pattern("(unclosed")).is_none());
    }

    #[test]
    fn empty_and_non_string_values_are_skipped() {
        let rules = FieldRules::new().pattern(r"^\d+$");
        assert!(run("", rules.clone()).is_none());
        assert!(run(true, rules).is_none());
    }
}
