//! Engine configuration.
//!
//! [`ValidatorConfig`] is the serializable, form-level setting; a
//! [`ValidationMode`] is what a single `validate_field` call runs with.

use serde::{Deserialize, Serialize};

/// How many failing criteria are collected per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriteriaMode {
    /// Stop at the first failing rule.
    #[default]
    FirstError,
    /// Evaluate every rule and record all failures in `FieldError::types`.
    All,
}

/// Form-level validator configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::{CriteriaMode, ValidatorConfig};
///
/// let config: ValidatorConfig =
///     serde_json::from_str(r#"{ "criteriaMode": "all", "nativeValidation": true }"#)?;
/// assert_eq!(config.criteria_mode, CriteriaMode::All);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Short-circuit or exhaustive error collection.
    pub criteria_mode: CriteriaMode,
    /// Mirror results into the platform's native validity channel.
    pub native_validation: bool,
}

impl ValidatorConfig {
    /// Sets the criteria mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_criteria_mode(mut self, criteria_mode: CriteriaMode) -> Self {
        self.criteria_mode = criteria_mode;
        self
    }

    /// Enables or disables native validity reporting.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_native_validation(mut self, enabled: bool) -> Self {
        self.native_validation = enabled;
        self
    }
}

/// Flags for one validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationMode {
    /// Evaluate every rule instead of stopping at the first failure.
    pub collect_all: bool,
    /// Invoke the native validity reporter.
    pub native_validation: bool,
}

impl ValidationMode {
    /// Short-circuit mode without native reporting.
    #[must_use]
    pub const fn first_error() -> Self {
        Self {
            collect_all: false,
            native_validation: false,
        }
    }

    /// Exhaustive mode without native reporting.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            collect_all: true,
            native_validation: false,
        }
    }

    /// Enables or disables native validity reporting.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_native_validation(mut self, enabled: bool) -> Self {
        self.native_validation = enabled;
        self
    }
}

impl From<ValidatorConfig> for ValidationMode {
    fn from(config: ValidatorConfig) -> Self {
        Self {
            collect_all: config.criteria_mode == CriteriaMode::All,
            native_validation: config.native_validation,
        }
    }
}
