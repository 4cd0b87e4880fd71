//! Declarative rule sets.
//!
//! [`FieldRules`] holds one optional spec per rule kind. Everything except
//! `validate` can be loaded from JSON:
//!
//! ```rust,ignore
//! let rules: FieldRules = serde_json::from_str(r#"{
//!     "required": "Please enter your age",
//!     "min": { "value": 18, "message": "adults only" },
//!     "maxLength": 3
//! }"#)?;
//! ```

pub mod custom;
pub mod spec;

use serde::{Deserialize, Serialize};

use crate::foundation::Message;

pub use custom::{
    AsyncFnValidator, CustomValidator, FnValidator, SharedValidator, TryFnValidator,
    ValidateResult, ValidateSpec, async_validator, try_validator, validator,
};
pub use spec::{Bound, Pattern, RequiredSpec, Resolved, RuleSpec};

/// The rules attached to one field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldRules {
    /// `required`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredSpec>,
    /// `min`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<RuleSpec<Bound>>,
    /// `max`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<RuleSpec<Bound>>,
    /// `minLength`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<RuleSpec<usize>>,
    /// `maxLength`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<RuleSpec<usize>>,
    /// `pattern`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RuleSpec<Pattern>>,
    /// `validate`; functions are attached in code, never deserialized.
    #[serde(skip)]
    pub validate: Option<ValidateSpec>,
}

impl FieldRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `required` from a flag, a message or an explicit spec.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, spec: impl Into<RequiredSpec>) -> Self {
        self.required = Some(spec.into());
        self
    }

    /// Sets a bare `min` bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, bound: impl Into<Bound>) -> Self {
        self.min = Some(RuleSpec::Value(bound.into()));
        self
    }

    /// Sets `min` with a message.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_with_message(
        mut self,
        bound: impl Into<Bound>,
        message: impl Into<Message>,
    ) -> Self {
        self.min = Some(RuleSpec::with_message(bound, message));
        self
    }

    /// Sets a bare `max` bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, bound: impl Into<Bound>) -> Self {
        self.max = Some(RuleSpec::Value(bound.into()));
        self
    }

    /// Sets `max` with a message.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_with_message(
        mut self,
        bound: impl Into<Bound>,
        message: impl Into<Message>,
    ) -> Self {
        self.max = Some(RuleSpec::with_message(bound, message));
        self
    }

    /// Sets a bare `minLength`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(RuleSpec::Value(length));
        self
    }

    /// Sets `minLength` with a message.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length_with_message(mut self, length: usize, message: impl Into<Message>) -> Self {
        self.min_length = Some(RuleSpec::with_message(length, message));
        self
    }

    /// Sets a bare `maxLength`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(RuleSpec::Value(length));
        self
    }

    /// Sets `maxLength` with a message.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length_with_message(mut self, length: usize, message: impl Into<Message>) -> Self {
        self.max_length = Some(RuleSpec::with_message(length, message));
        self
    }

    /// Sets a bare `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: impl Into<Pattern>) -> Self {
        self.pattern = Some(RuleSpec::Value(pattern.into()));
        self
    }

    /// Sets `pattern` with a message.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern_with_message(
        mut self,
        pattern: impl Into<Pattern>,
        message: impl Into<Message>,
    ) -> Self {
        self.pattern = Some(RuleSpec::with_message(pattern, message));
        self
    }

    /// Attaches a single custom validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate(mut self, validator: SharedValidator) -> Self {
        self.validate = Some(ValidateSpec::Single(validator));
        self
    }

    /// Attaches named custom validators, run in the given order.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_map<K, I>(mut self, validators: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SharedValidator)>,
    {
        self.validate = Some(ValidateSpec::map(validators));
        self
    }

    /// Returns true when no rule is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
            && self.validate.is_none()
    }
}
