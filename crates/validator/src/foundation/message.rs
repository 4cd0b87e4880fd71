//! Opaque message payload carried by rules and errors.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A human-readable message attached to a rule or produced by a validator.
///
/// The engine never inspects or formats messages; it only moves them from
/// the rule that declared them into the resulting [`FieldError`](crate::FieldError).
/// An empty message is legal and means "failed, no text".
///
/// Uses `Cow<'static, str>` so static messages never allocate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Cow<'static, str>);

impl Message {
    /// The empty message.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(""))
    }

    /// Creates a message from any string-like value.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// Returns the message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the message carries no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(text: Cow<'static, str>) -> Self {
        Self(text)
    }
}

impl PartialEq<str> for Message {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_messages_are_borrowed() {
        let message = Message::from("required");
        assert!(matches!(message.0, Cow::Borrowed(_)));
        assert_eq!(message, "required");
    }

    #[test]
    fn empty_message() {
        assert!(Message::empty().is_empty());
        assert!(Message::default().is_empty());
        assert!(!Message::new(format!("at least {}", 3)).is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Message::from("too short")).unwrap();
        assert_eq!(json, "\"too short\"");

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "too short");
    }
}
