//! # fieldcheck-validator
//!
//! Per-field validation for interactive form inputs: given a field's value
//! and a declarative rule set, decide whether the value is acceptable and
//! describe what failed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let field = FieldDescriptor::new("age", "17").with_rules(
//!     FieldRules::new()
//!         .required("Please enter your age")
//!         .min_with_message(18, "adults only"),
//! );
//!
//! let outcome = FieldValidator::new().validate_field(&field).await?;
//! assert_eq!(outcome.get("age").unwrap().kind, RuleKind::Min);
//! ```
//!
//! ## Rules
//!
//! Rules are evaluated in a fixed order: `required`, `min`/`max`,
//! `minLength`/`maxLength`, `pattern`, then custom `validate` functions.
//! [`CriteriaMode::FirstError`] stops at the first failure;
//! [`CriteriaMode::All`] evaluates everything and lists every failure in
//! [`FieldError::types`].
//!
//! ## Collaborators
//!
//! - [`GroupResolver`](field::GroupResolver): reduces checkbox / radio
//!   groups to one value
//! - [`ValidityReporter`](engine::ValidityReporter): mirrors results into a
//!   platform's native validity channel

pub mod engine;
pub mod evaluators;
pub mod field;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use engine::{FieldValidator, FieldValidatorBuilder, validate_field};
pub use field::{FieldDescriptor, InputElement, InputKind};
pub use foundation::{
    BoxError, CriteriaMode, FieldError, Message, RuleKind, ValidateFieldError, ValidationMode,
    ValidationOutcome, ValidatorConfig,
};
pub use rules::FieldRules;
