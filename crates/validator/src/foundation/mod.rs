//! Foundation types shared by every part of the engine.
//!
//! - **Messages**: [`Message`], the opaque payload rules carry
//! - **Kinds**: [`RuleKind`], the taxonomy of failing rules
//! - **Results**: [`FieldError`], [`ValidationOutcome`]
//! - **Errors**: [`ValidateFieldError`], the only `Err` the engine returns
//! - **Configuration**: [`ValidatorConfig`], [`CriteriaMode`], [`ValidationMode`]

pub mod config;
pub mod error;
pub mod kind;
pub mod message;

pub use config::{CriteriaMode, ValidationMode, ValidatorConfig};
pub use error::{BoxError, FieldError, ValidateFieldError, ValidationOutcome};
pub use kind::RuleKind;
pub use message::Message;
