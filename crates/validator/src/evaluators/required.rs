//! The `required` rule.

use serde_json::Value;
use tracing::debug;

use super::{FieldContext, Failure, RuleEvaluator, Target};
use crate::field::value::is_absent;
use crate::foundation::RuleKind;

/// Fails when a required field has nothing selected or entered.
///
/// Plain fields are missing when empty or `null`; checkbox and radio fields
/// defer to the group resolver. A boolean `false` is always missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredRule;

impl RequiredRule {
    fn is_missing(field: &FieldContext<'_>) -> bool {
        let descriptor = field.descriptor();
        let is_checkbox = descriptor.is_checkbox();
        let is_radio = descriptor.is_radio();

        (!is_checkbox && !is_radio && (field.is_empty() || is_absent(field.value())))
            || *field.value() == Value::Bool(false)
            || (is_checkbox
                && !field
                    .resolver()
                    .resolve_checkbox(descriptor.group_elements())
                    .is_valid)
            || (is_radio
                && !field
                    .resolver()
                    .resolve_radio(descriptor.group_elements())
                    .is_valid)
    }
}

impl RuleEvaluator for RequiredRule {
    fn name(&self) -> &'static str {
        "required"
    }

    fn evaluate(&self, field: &FieldContext<'_>) -> Option<Failure> {
        let spec = field.rules().required.as_ref()?;
        if !Self::is_missing(field) {
            return None;
        }

        let resolved = spec.resolve();
        if resolved.value != Some(true) {
            debug!(field = %field.descriptor().name, "required rule disabled");
            return None;
        }
        Some(Failure::new(RuleKind::Required, resolved.message, Target::Input))
    }
}
