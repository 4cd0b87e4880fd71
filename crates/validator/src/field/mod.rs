//! Field descriptors: the validation-relevant snapshot of one form input.
//!
//! A [`FieldDescriptor`] bundles the field's logical value, the element(s)
//! backing it and its rules. Elements are plain data ([`InputElement`]);
//! nothing here touches a live UI.

pub mod group;
pub mod value;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::FieldRules;

pub use group::{DefaultGroupResolver, GroupResolver, GroupValue};
pub use value::is_empty;

// ============================================================================
// INPUT ELEMENT
// ============================================================================

/// Kind of input element backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Free text (also email, password, url, ...).
    #[default]
    Text,
    /// Numeric input.
    Number,
    /// Date or date-time input.
    Date,
    /// File picker.
    File,
    /// Checkbox.
    Checkbox,
    /// Radio button.
    Radio,
    /// Select box.
    Select,
    /// Anything else.
    Other,
}

/// Snapshot of one input element.
///
/// `raw_value` is the element's own string value, which may differ from the
/// field's logical value (e.g. a number input registered with numeric
/// coercion). `value_as_number` / `value_as_date` are the element's
/// pre-coerced views when the platform provides them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputElement {
    /// Identifier used as the error's focus target.
    pub id: String,
    /// Element kind.
    pub kind: InputKind,
    /// Raw string value of the element.
    pub raw_value: String,
    /// Pre-coerced numeric view.
    pub value_as_number: Option<f64>,
    /// Pre-coerced date view.
    pub value_as_date: Option<DateTime<Utc>>,
    /// Checked state (checkbox / radio).
    pub checked: bool,
    /// Disabled elements never count toward a group's value.
    pub disabled: bool,
    /// Whether the element declares an explicit `value` attribute.
    pub has_value_attribute: bool,
}

impl InputElement {
    /// Creates an element with the given id and kind.
    pub fn new(id: impl Into<String>, kind: InputKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    /// Creates a text element.
    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, InputKind::Text)
    }

    /// Creates a file element.
    pub fn file(id: impl Into<String>) -> Self {
        Self::new(id, InputKind::File)
    }

    /// Creates an unchecked checkbox carrying `value`.
    pub fn checkbox(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            raw_value: value.into(),
            has_value_attribute: true,
            ..Self::new(id, InputKind::Checkbox)
        }
    }

    /// Creates an unchecked radio button carrying `value`.
    pub fn radio(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            raw_value: value.into(),
            has_value_attribute: true,
            ..Self::new(id, InputKind::Radio)
        }
    }

    /// Sets the raw string value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_raw_value(mut self, raw_value: impl Into<String>) -> Self {
        self.raw_value = raw_value.into();
        self
    }

    /// Sets the pre-coerced numeric view.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value_as_number(mut self, value: f64) -> Self {
        self.value_as_number = Some(value);
        self
    }

    /// Sets the pre-coerced date view.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value_as_date(mut self, value: DateTime<Utc>) -> Self {
        self.value_as_date = Some(value);
        self
    }

    /// Sets the checked state.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the disabled state.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns true for checkboxes.
    #[must_use]
    pub fn is_checkbox(&self) -> bool {
        self.kind == InputKind::Checkbox
    }

    /// Returns true for radio buttons.
    #[must_use]
    pub fn is_radio(&self) -> bool {
        self.kind == InputKind::Radio
    }

    /// Returns true for file pickers.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == InputKind::File
    }

    /// Counts toward a group's value: checked and enabled.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.checked && !self.disabled
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// The unit of validation.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let field = FieldDescriptor::new("user.age", "17")
///     .with_rules(FieldRules::new().min_with_message(18, "adults only"));
/// ```
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Dotted path of the field inside the form's value tree.
    pub name: String,
    /// Current logical value; `Null` means absent.
    pub value: Value,
    /// Primary element backing the field.
    pub element: InputElement,
    /// Underlying checkbox / radio elements. Empty for plain inputs.
    pub group: Vec<InputElement>,
    /// The field is registered with numeric coercion.
    pub value_as_number: bool,
    /// Unmounted fields are never validated.
    pub mounted: bool,
    /// Rules to evaluate.
    pub rules: FieldRules,
}

impl FieldDescriptor {
    /// Creates a mounted text field whose element mirrors a string value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        let raw_value = value.as_str().unwrap_or_default().to_owned();
        Self {
            element: InputElement::text(name.clone()).with_raw_value(raw_value),
            name,
            value,
            group: Vec::new(),
            value_as_number: false,
            mounted: true,
            rules: FieldRules::default(),
        }
    }

    /// Replaces the primary element.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_element(mut self, element: InputElement) -> Self {
        self.element = element;
        self
    }

    /// Attaches checkbox / radio group elements.
    ///
    /// The primary element takes the first group element's kind so the
    /// engine recognises the field as a group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(mut self, group: Vec<InputElement>) -> Self {
        if let Some(first) = group.first() {
            self.element = InputElement::new(self.name.clone(), first.kind);
        }
        self.group = group;
        self
    }

    /// Sets the rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }

    /// Marks the field as registered with numeric coercion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value_as_number(mut self, enabled: bool) -> Self {
        self.value_as_number = enabled;
        self
    }

    /// Sets the mount state.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mounted(mut self, mounted: bool) -> Self {
        self.mounted = mounted;
        self
    }

    /// The original input element: the first group element, else the
    /// primary element. Required and custom failures point here.
    #[must_use]
    pub fn input_element(&self) -> &InputElement {
        self.group.first().unwrap_or(&self.element)
    }

    /// Elements to hand to a group resolver.
    #[must_use]
    pub fn group_elements(&self) -> &[InputElement] {
        if self.group.is_empty() {
            std::slice::from_ref(&self.element)
        } else {
            &self.group
        }
    }

    /// Returns true when the field is a checkbox.
    #[must_use]
    pub fn is_checkbox(&self) -> bool {
        self.element.is_checkbox()
    }

    /// Returns true when the field is a radio group.
    #[must_use]
    pub fn is_radio(&self) -> bool {
        self.element.is_radio()
    }
}
