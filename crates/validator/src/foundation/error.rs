//! Validation results and the engine's error type.
//!
//! Rule failures are data: a [`FieldError`] per failing field, collected in a
//! [`ValidationOutcome`]. The only `Err` the engine returns is
//! [`ValidateFieldError`], raised when a custom validator itself fails.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Message, RuleKind};

/// Boxed error returned by custom validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// The failure summary of one field.
///
/// `kind` and `message` describe the headline failure. `types` is only
/// present when every criterion was collected and then holds all failing
/// rules in evaluation order.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::{FieldError, RuleKind};
///
/// let error = FieldError::new(RuleKind::Required, "This field is required", "email");
/// assert_eq!(error.kind, RuleKind::Required);
/// assert!(error.types.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Rule that produced the headline failure.
    #[serde(rename = "type")]
    pub kind: RuleKind,

    /// Message of the headline failure.
    pub message: Message,

    /// Id of the element a UI should focus for this error.
    #[serde(rename = "ref")]
    pub target: String,

    /// Every failing rule, keyed by kind. Only set in exhaustive mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<IndexMap<RuleKind, Message>>,
}

impl FieldError {
    /// Creates a field error without per-kind detail.
    pub fn new(kind: RuleKind, message: impl Into<Message>, target: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            target: target.into(),
            types: None,
        }
    }

    /// Looks up the message recorded for `kind` in the per-kind detail.
    #[must_use]
    pub fn type_message(&self, kind: &RuleKind) -> Option<&Message> {
        self.types.as_ref().and_then(|types| types.get(kind))
    }

    /// Iterates over every failing kind, falling back to the headline kind
    /// when no per-kind detail was collected.
    pub fn failed_kinds(&self) -> impl Iterator<Item = &RuleKind> {
        let detail = self.types.as_ref().map(|types| types.keys());
        let headline = if detail.is_none() {
            Some(&self.kind)
        } else {
            None
        };
        detail.into_iter().flatten().chain(headline)
    }
}

// ============================================================================
// VALIDATION OUTCOME
// ============================================================================

/// Result of validating one field: field name to at most one [`FieldError`].
///
/// An empty outcome means the field is valid (or was not mounted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    errors: IndexMap<String, FieldError>,
}

impl ValidationOutcome {
    /// Creates an empty outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outcome holding a single error.
    pub fn single(name: impl Into<String>, error: FieldError) -> Self {
        let mut errors = IndexMap::with_capacity(1);
        errors.insert(name.into(), error);
        Self { errors }
    }

    /// Returns true when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true when the outcome holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// Returns true when `name` has an error.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    /// Iterates over `(name, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(name, error)| (name.as_str(), error))
    }

    /// Merges this outcome into longer-lived form error state.
    ///
    /// Entries for fields present here replace stale ones; the caller stays
    /// responsible for clearing fields that passed.
    pub fn merge_into(self, state: &mut IndexMap<String, FieldError>) {
        state.extend(self.errors);
    }

    /// Consumes the outcome, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, FieldError> {
        self.errors
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = (String, FieldError);
    type IntoIter = indexmap::map::IntoIter<String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// ============================================================================
// ENGINE ERROR
// ============================================================================

/// Error aborting a `validate_field` call.
///
/// Rule failures never surface here; only a custom validator that itself
/// errors does. No rule after the failing validator runs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidateFieldError {
    /// A custom validator returned an error instead of a verdict.
    #[error("custom validator `{key}` for field `{field}` failed: {source}")]
    Validator {
        /// Name of the field being validated.
        field: String,
        /// `validate` for the single form, otherwise the map key.
        key: String,
        /// Error raised by the validator.
        #[source]
        source: BoxError,
    },
}

impl ValidateFieldError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validator { .. } => "FIELD_VALIDATOR_FAILED",
        }
    }

    /// Name of the field whose validation was aborted.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Validator { field, .. } => field,
        }
    }
}
