//! Built-in rule evaluators.
//!
//! Each evaluator is a side-effect-free check over a [`FieldContext`]. The
//! engine runs them in [`PIPELINE`] order and decides whether to stop or
//! continue after a failure; evaluators never see the criteria mode.

pub mod length;
pub mod pattern;
pub mod range;
pub mod required;

use serde_json::Value;

use crate::field::{FieldDescriptor, GroupResolver, is_empty};
use crate::foundation::{Message, RuleKind};
use crate::rules::FieldRules;

pub use length::LengthRule;
pub use pattern::PatternRule;
pub use range::RangeRule;
pub use required::RequiredRule;

// ============================================================================
// FIELD CONTEXT
// ============================================================================

/// What an evaluator may look at: the descriptor, its emptiness and the
/// group resolver.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    descriptor: &'a FieldDescriptor,
    empty: bool,
    resolver: &'a dyn GroupResolver,
}

impl<'a> FieldContext<'a> {
    /// Classifies the descriptor once and binds the resolver.
    #[must_use]
    pub fn new(descriptor: &'a FieldDescriptor, resolver: &'a dyn GroupResolver) -> Self {
        Self {
            descriptor,
            empty: is_empty(descriptor),
            resolver,
        }
    }

    /// The field under validation.
    #[must_use]
    pub fn descriptor(&self) -> &'a FieldDescriptor {
        self.descriptor
    }

    /// The field's current value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        &self.descriptor.value
    }

    /// The field's rules.
    #[must_use]
    pub fn rules(&self) -> &'a FieldRules {
        &self.descriptor.rules
    }

    /// Emptiness as decided by [`is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Group resolver for checkbox and radio fields.
    #[must_use]
    pub fn resolver(&self) -> &'a dyn GroupResolver {
        self.resolver
    }

    /// The value as a non-empty string, if it is one.
    pub(crate) fn non_empty_text(&self) -> Option<&'a str> {
        if self.empty {
            return None;
        }
        match &self.descriptor.value {
            Value::String(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// Which element a failure points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The field's primary element.
    Element,
    /// The original input element (first group element, else primary).
    /// Used by `required` and custom validators so the UI has something
    /// focusable.
    Input,
}

impl Target {
    /// Resolves the target to an element id.
    #[must_use]
    pub fn id<'a>(&self, descriptor: &'a FieldDescriptor) -> &'a str {
        match self {
            Self::Element => &descriptor.element.id,
            Self::Input => &descriptor.input_element().id,
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The failing rule.
    pub kind: RuleKind,
    /// The rule's message, possibly empty.
    pub message: Message,
    /// Element the failure points at.
    pub target: Target,
}

impl Failure {
    /// Creates a failure.
    pub fn new(kind: RuleKind, message: impl Into<Message>, target: Target) -> Self {
        Self {
            kind,
            message: message.into(),
            target,
        }
    }
}

// ============================================================================
// EVALUATOR TRAIT
// ============================================================================

/// A built-in rule check.
pub trait RuleEvaluator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the violation, or `None` when the rule passes or does not
    /// apply.
    fn evaluate(&self, field: &FieldContext<'_>) -> Option<Failure>;
}

/// Built-in evaluators in priority order.
pub(crate) const PIPELINE: [&dyn RuleEvaluator; 4] =
    [&RequiredRule, &RangeRule, &LengthRule, &PatternRule];

// ============================================================================
// LIMIT HELPER
// ============================================================================

/// One side of a min/max pair.
pub(crate) struct Limit {
    pub(crate) kind: RuleKind,
    pub(crate) message: Message,
    pub(crate) exceeded: bool,
}

/// Picks the failing side of a min/max pair. Max wins when both exceed.
pub(crate) fn limit_failure(max: Limit, min: Limit) -> Option<Failure> {
    let hit = if max.exceeded {
        max
    } else if min.exceeded {
        min
    } else {
        return None;
    };
    Some(Failure::new(hit.kind, hit.message, Target::Element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DefaultGroupResolver, InputElement};

    fn limit(kind: RuleKind, exceeded: bool) -> Limit {
        Limit {
            message: Message::new(kind.to_string()),
            kind,
            exceeded,
        }
    }

    #[test]
    fn max_wins_ties() {
        let failure = limit_failure(limit(RuleKind::Max, true), limit(RuleKind::Min, true));
        assert_eq!(failure.map(|f| f.kind), Some(RuleKind::Max));
    }

    #[test]
    fn min_reported_alone() {
        let failure = limit_failure(limit(RuleKind::Max, false), limit(RuleKind::Min, true));
        assert_eq!(failure.map(|f| f.message), Some(Message::from("min")));
        assert!(limit_failure(limit(RuleKind::Max, false), limit(RuleKind::Min, false)).is_none());
    }

    #[test]
    fn pipeline_order() {
        let names: Vec<_> = PIPELINE.iter().map(|rule| rule.name()).collect();
        assert_eq!(names, ["required", "range", "length", "pattern"]);
    }

    #[test]
    fn target_ids() {
        let field = FieldDescriptor::new("pets", Value::Null)
            .with_group(vec![InputElement::checkbox("pets-cat", "cat")]);
        assert_eq!(Target::Element.id(&field), "pets");
        assert_eq!(Target::Input.id(&field), "pets-cat");
    }

    #[test]
    fn non_empty_text_only_for_strings() {
        let resolver = DefaultGroupResolver;
        let text = FieldDescriptor::new("a", "hi");
        assert_eq!(FieldContext::new(&text, &resolver).non_empty_text(), Some("hi"));

        let blank = FieldDescriptor::new("a", "");
        assert!(FieldContext::new(&blank, &resolver).non_empty_text().is_none());

        let number = FieldDescriptor::new("a", 3);
        assert!(FieldContext::new(&number, &resolver).non_empty_text().is_none());
    }
}
