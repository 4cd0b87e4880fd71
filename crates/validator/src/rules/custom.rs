//! Custom validators: user functions run after the built-in rules.
//!
//! A custom validator receives the field's value and returns a
//! [`ValidateResult`]. Validators are async so they can perform lookups;
//! plain closures are adapted with [`validator`] / [`try_validator`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let rules = FieldRules::new().validate_map([
//!     ("unique", async_validator(|value| async move {
//!         let taken = lookup(&value).await?;
//!         Ok::<_, BoxError>(if taken { "already taken".into() } else { ValidateResult::Valid })
//!     })),
//!     ("format", validator(|value| value.as_str().is_some_and(|s| s.contains('@')))),
//! ]);
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{BoxError, Message, RuleKind};

// ============================================================================
// VALIDATE RESULT
// ============================================================================

/// Verdict of a custom validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateResult {
    /// The value passes.
    Valid,
    /// The value fails without a message.
    Invalid,
    /// The value fails with a message.
    Message(Message),
}

impl ValidateResult {
    /// Returns true for [`ValidateResult::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The message to record, or `None` when the value passed.
    #[must_use]
    pub fn into_failure(self) -> Option<Message> {
        match self {
            Self::Valid => None,
            Self::Invalid => Some(Message::empty()),
            Self::Message(message) => Some(message),
        }
    }
}

impl From<bool> for ValidateResult {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl From<&'static str> for ValidateResult {
    fn from(message: &'static str) -> Self {
        Self::Message(message.into())
    }
}

impl From<String> for ValidateResult {
    fn from(message: String) -> Self {
        Self::Message(message.into())
    }
}

impl From<Message> for ValidateResult {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl<M: Into<Message>> From<Option<M>> for ValidateResult {
    fn from(message: Option<M>) -> Self {
        message.map_or(Self::Valid, |message| Self::Message(message.into()))
    }
}

impl<M: Into<Message>> From<Result<(), M>> for ValidateResult {
    fn from(result: Result<(), M>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(message) => Self::Message(message.into()),
        }
    }
}

// ============================================================================
// CUSTOM VALIDATOR TRAIT
// ============================================================================

/// A user-supplied validator.
///
/// Returning `Err` is not a rule failure: it aborts the whole
/// `validate_field` call with [`ValidateFieldError`](crate::ValidateFieldError).
#[async_trait]
pub trait CustomValidator: Send + Sync {
    /// Judges `value`.
    async fn validate(&self, value: &Value) -> Result<ValidateResult, BoxError>;
}

/// Shared handle to a custom validator.
pub type SharedValidator = Arc<dyn CustomValidator>;

/// Adapter for infallible synchronous closures.
pub struct FnValidator<F>(F);

#[async_trait]
impl<F, R> CustomValidator for FnValidator<F>
where
    F: Fn(&Value) -> R + Send + Sync,
    R: Into<ValidateResult> + 'static,
{
    async fn validate(&self, value: &Value) -> Result<ValidateResult, BoxError> {
        Ok((self.0)(value).into())
    }
}

/// Adapter for fallible synchronous closures.
pub struct TryFnValidator<F>(F);

#[async_trait]
impl<F, R> CustomValidator for TryFnValidator<F>
where
    F: Fn(&Value) -> Result<R, BoxError> + Send + Sync,
    R: Into<ValidateResult> + 'static,
{
    async fn validate(&self, value: &Value) -> Result<ValidateResult, BoxError> {
        (self.0)(value).map(Into::into)
    }
}

/// Adapter for closures returning a future.
pub struct AsyncFnValidator<F>(F);

#[async_trait]
impl<F, Fut, R> CustomValidator for AsyncFnValidator<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, BoxError>> + Send + 'static,
    R: Into<ValidateResult> + 'static,
{
    async fn validate(&self, value: &Value) -> Result<ValidateResult, BoxError> {
        (self.0)(value.clone()).await.map(Into::into)
    }
}

/// Wraps an infallible synchronous closure.
pub fn validator<F, R>(f: F) -> SharedValidator
where
    F: Fn(&Value) -> R + Send + Sync + 'static,
    R: Into<ValidateResult> + 'static,
{
    Arc::new(FnValidator(f))
}

/// Wraps a fallible synchronous closure.
pub fn try_validator<F, R>(f: F) -> SharedValidator
where
    F: Fn(&Value) -> Result<R, BoxError> + Send + Sync + 'static,
    R: Into<ValidateResult> + 'static,
{
    Arc::new(TryFnValidator(f))
}

/// Wraps a closure returning a future. The closure receives an owned copy
/// of the value so the future can be `'static`.
pub fn async_validator<F, Fut, R>(f: F) -> SharedValidator
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, BoxError>> + Send + 'static,
    R: Into<ValidateResult> + 'static,
{
    Arc::new(AsyncFnValidator(f))
}

// ============================================================================
// VALIDATE SPEC
// ============================================================================

/// The `validate` rule: one validator or an ordered map of named ones.
#[derive(Clone)]
pub enum ValidateSpec {
    /// Failures are recorded as [`RuleKind::Validate`].
    Single(SharedValidator),
    /// Failures are recorded under their key, in declaration order.
    Map(IndexMap<String, SharedValidator>),
}

impl ValidateSpec {
    /// Builds the map form from `(key, validator)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SharedValidator)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, validator)| (key.into(), validator))
                .collect(),
        )
    }

    /// Normalises both forms to an ordered list of `(kind, validator)`.
    #[must_use]
    pub fn entries(&self) -> Vec<(RuleKind, &SharedValidator)> {
        match self {
            Self::Single(validator) => vec![(RuleKind::Validate, validator)],
            Self::Map(validators) => validators
                .iter()
                .map(|(key, validator)| (RuleKind::from_key(key.clone()), validator))
                .collect(),
        }
    }

    /// Number of validators.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Map(validators) => validators.len(),
        }
    }

    /// Returns true for an empty map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ValidateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(_) => f.write_str("ValidateSpec::Single(..)"),
            Self::Map(validators) => f
                .debug_tuple("ValidateSpec::Map")
                .field(&validators.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

impl From<SharedValidator> for ValidateSpec {
    fn from(validator: SharedValidator) -> Self {
        Self::Single(validator)
    }
}
