//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    BoxError, CriteriaMode, FieldError, Message, RuleKind, ValidateFieldError, ValidationMode,
    ValidationOutcome, ValidatorConfig,
};

// ============================================================================
// FIELDS AND RULES
// ============================================================================

pub use crate::field::{
    DefaultGroupResolver, FieldDescriptor, GroupResolver, GroupValue, InputElement, InputKind,
};
pub use crate::rules::{
    Bound, CustomValidator, FieldRules, Pattern, RequiredSpec, RuleSpec, SharedValidator,
    ValidateResult, ValidateSpec, async_validator, try_validator, validator,
};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{
    FieldValidator, FieldValidatorBuilder, NoopReporter, RecordingReporter, ValidityReporter,
    validate_field,
};
