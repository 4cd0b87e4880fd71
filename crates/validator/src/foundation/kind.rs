//! Rule kinds: the taxonomy tag identifying which constraint failed.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifies the rule that produced a failure.
///
/// Built-in kinds render with the names form libraries use on the wire
/// (`required`, `min`, `max`, `minLength`, `maxLength`, `pattern`,
/// `validate`). Keys of a custom validator map become [`RuleKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// The field must hold a value.
    Required,
    /// Numeric or date lower bound.
    Min,
    /// Numeric or date upper bound.
    Max,
    /// Minimum string length.
    MinLength,
    /// Maximum string length.
    MaxLength,
    /// Regular expression match.
    Pattern,
    /// Single custom validator.
    Validate,
    /// Named entry of a custom validator map.
    Custom(Cow<'static, str>),
}

impl RuleKind {
    /// Builds a kind from a key, mapping built-in names onto their variants.
    ///
    /// A custom validator keyed `"required"` therefore shares its slot in
    /// `FieldError::types` with the required rule.
    pub fn from_key(key: impl Into<Cow<'static, str>>) -> Self {
        let key = key.into();
        match key.as_ref() {
            "required" => Self::Required,
            "min" => Self::Min,
            "max" => Self::Max,
            "minLength" => Self::MinLength,
            "maxLength" => Self::MaxLength,
            "pattern" => Self::Pattern,
            "validate" => Self::Validate,
            _ => Self::Custom(key),
        }
    }

    /// Returns the wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::Validate => "validate",
            Self::Custom(key) => key,
        }
    }

    /// Returns true for kinds that are not custom map keys.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s.to_owned()))
    }
}

impl From<&'static str> for RuleKind {
    fn from(key: &'static str) -> Self {
        Self::from_key(key)
    }
}

impl From<String> for RuleKind {
    fn from(key: String) -> Self {
        Self::from_key(key)
    }
}

impl Serialize for RuleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_key)
    }
}
