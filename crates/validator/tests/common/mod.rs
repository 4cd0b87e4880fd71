//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use fieldcheck_validator::prelude::*;

/// Validator in first-error mode.
pub fn first_error() -> FieldValidator {
    FieldValidator::new()
}

/// Validator in exhaustive mode.
pub fn collect_all() -> FieldValidator {
    FieldValidator::builder()
        .criteria_mode(CriteriaMode::All)
        .build()
}

/// Validator with native validation wired to a recorder.
pub fn with_recorder(criteria_mode: CriteriaMode) -> (FieldValidator, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::new());
    let validator = FieldValidator::builder()
        .criteria_mode(criteria_mode)
        .native_validation(true)
        .reporter(reporter.clone())
        .build();
    (validator, reporter)
}

/// Validates and returns the single error for the field, if any.
pub async fn error_of(validator: &FieldValidator, field: &FieldDescriptor) -> Option<FieldError> {
    let outcome = validator
        .validate_field(field)
        .await
        .expect("no custom validator should error");
    assert!(outcome.len() <= 1, "at most one entry per field");
    outcome.get(&field.name).cloned()
}

/// Kinds listed in `types`, in order.
pub fn type_kinds(error: &FieldError) -> Vec<RuleKind> {
    error
        .types
        .as_ref()
        .map(|types| types.keys().cloned().collect())
        .unwrap_or_default()
}
