//! The validation driver.
//!
//! [`FieldValidator`] runs the built-in evaluators in priority order
//! (required, range, length, pattern) and then the field's custom
//! validators. In first-error mode it returns at the first failure; in
//! exhaustive mode it records every failure and the last one becomes the
//! headline.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let validator = FieldValidator::builder()
//!     .criteria_mode(CriteriaMode::All)
//!     .build();
//!
//! let field = FieldDescriptor::new("username", "ab")
//!     .with_rules(FieldRules::new().min_length_with_message(3, "too short"));
//!
//! let outcome = validator.validate_field(&field).await?;
//! assert_eq!(outcome.get("username").unwrap().kind, RuleKind::MinLength);
//! ```

mod accumulator;
pub mod reporter;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::evaluators::{FieldContext, PIPELINE, Target};
use crate::field::{DefaultGroupResolver, FieldDescriptor, GroupResolver};
use crate::foundation::{
    CriteriaMode, ValidateFieldError, ValidationMode, ValidationOutcome, ValidatorConfig,
};

use accumulator::ErrorAccumulator;
use reporter::NativeValidity;

pub use reporter::{CLEAR, NoopReporter, RecordingReporter, ValidityEvent, ValidityReporter};

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Validates single fields.
///
/// Cheap to clone; collaborators are shared. Different fields may be
/// validated concurrently from one instance.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    config: ValidatorConfig,
    reporter: Arc<dyn ValidityReporter>,
    resolver: Arc<dyn GroupResolver>,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FieldValidator {
    /// Creates a validator with the default configuration and collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a validator.
    #[must_use]
    pub fn builder() -> FieldValidatorBuilder {
        FieldValidatorBuilder::default()
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The mode used by [`validate_field`](Self::validate_field).
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        ValidationMode::from(self.config)
    }

    /// Validates `descriptor` with the configured mode.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateFieldError::Validator`] when a custom validator
    /// fails instead of returning a verdict.
    pub async fn validate_field(
        &self,
        descriptor: &FieldDescriptor,
    ) -> Result<ValidationOutcome, ValidateFieldError> {
        self.validate_field_with(descriptor, self.mode()).await
    }

    /// Validates `descriptor` with an explicit mode.
    ///
    /// The outcome holds at most one entry, keyed by the field name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateFieldError::Validator`] when a custom validator
    /// fails instead of returning a verdict. No rule after it runs.
    #[tracing::instrument(
        skip_all,
        fields(field = %descriptor.name, collect_all = mode.collect_all)
    )]
    pub async fn validate_field_with(
        &self,
        descriptor: &FieldDescriptor,
        mode: ValidationMode,
    ) -> Result<ValidationOutcome, ValidateFieldError> {
        if !descriptor.mounted {
            debug!("field not mounted, skipping");
            return Ok(ValidationOutcome::new());
        }

        let field = FieldContext::new(descriptor, self.resolver.as_ref());
        let native = NativeValidity::new(
            self.reporter.as_ref(),
            descriptor.input_element(),
            mode.native_validation,
        );
        let mut errors = ErrorAccumulator::new(mode.collect_all);

        for rule in PIPELINE {
            let Some(failure) = rule.evaluate(&field) else {
                continue;
            };
            debug!(rule = rule.name(), kind = %failure.kind, "rule failed");

            native.fail(&failure.message);
            errors.record(failure.kind, failure.message, failure.target.id(descriptor));
            if !mode.collect_all {
                return Ok(errors.finish(&descriptor.name));
            }
        }

        if let Some(validate) = &descriptor.rules.validate {
            for (kind, validator) in validate.entries() {
                trace!(key = %kind, "running custom validator");
                let verdict = validator
                    .validate(&descriptor.value)
                    .await
                    .map_err(|source| ValidateFieldError::Validator {
                        field: descriptor.name.clone(),
                        key: kind.to_string(),
                        source,
                    })?;

                let Some(message) = verdict.into_failure() else {
                    continue;
                };
                debug!(key = %kind, "custom validator failed");

                native.fail(&message);
                errors.record(kind, message, Target::Input.id(descriptor));
                if !mode.collect_all {
                    return Ok(errors.finish(&descriptor.name));
                }
            }
        }

        native.finish(mode.collect_all, errors.headline());
        Ok(errors.finish(&descriptor.name))
    }
}

/// Validates one field with the default collaborators.
///
/// # Errors
///
/// Returns [`ValidateFieldError::Validator`] when a custom validator fails.
pub async fn validate_field(
    descriptor: &FieldDescriptor,
    collect_all: bool,
    native_validation: bool,
) -> Result<ValidationOutcome, ValidateFieldError> {
    let mode = ValidationMode {
        collect_all,
        native_validation,
    };
    FieldValidator::new()
        .validate_field_with(descriptor, mode)
        .await
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`FieldValidator`].
#[derive(Debug, Default)]
pub struct FieldValidatorBuilder {
    config: ValidatorConfig,
    reporter: Option<Arc<dyn ValidityReporter>>,
    resolver: Option<Arc<dyn GroupResolver>>,
}

impl FieldValidatorBuilder {
    /// Replaces the whole configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the criteria mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn criteria_mode(mut self, criteria_mode: CriteriaMode) -> Self {
        self.config.criteria_mode = criteria_mode;
        self
    }

    /// Enables or disables native validity reporting.
    #[must_use = "builder methods must be chained or built"]
    pub fn native_validation(mut self, enabled: bool) -> Self {
        self.config.native_validation = enabled;
        self
    }

    /// Sets the native validity reporter.
    #[must_use = "builder methods must be chained or built"]
    pub fn reporter(mut self, reporter: Arc<dyn ValidityReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Sets the checkbox / radio group resolver.
    #[must_use = "builder methods must be chained or built"]
    pub fn group_resolver(mut self, resolver: Arc<dyn GroupResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> FieldValidator {
        FieldValidator {
            config: self.config,
            reporter: self.reporter.unwrap_or_else(|| Arc::new(NoopReporter)),
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(DefaultGroupResolver)),
        }
    }
}
