//! Checkbox and radio group resolution.
//!
//! A group of elements is reduced to one logical value plus a flag saying
//! whether the group's required-ness is satisfied.

use std::fmt;

use serde_json::Value;

use super::InputElement;

/// Logical value of a checkbox or radio group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupValue {
    /// The logical selection.
    pub value: Value,
    /// Whether something is selected.
    pub is_valid: bool,
}

impl GroupValue {
    fn invalid(value: Value) -> Self {
        Self {
            value,
            is_valid: false,
        }
    }

    fn valid(value: Value) -> Self {
        Self {
            value,
            is_valid: true,
        }
    }
}

/// Reduces checkbox / radio groups to a single value.
///
/// Implement this to plug in platform-specific group semantics; the engine
/// only reads `is_valid`.
pub trait GroupResolver: Send + Sync + fmt::Debug {
    /// Resolves a checkbox group (one or more checkboxes sharing a name).
    fn resolve_checkbox(&self, elements: &[InputElement]) -> GroupValue;

    /// Resolves a radio group.
    fn resolve_radio(&self, elements: &[InputElement]) -> GroupValue;
}

/// Browser-style group semantics.
///
/// - Several checkboxes: the values of all checked, enabled boxes; valid
///   when at least one is selected.
/// - A single checkbox: its value (or `true` when it has no value) when
///   selected, otherwise `false`.
/// - Radios: the value of the last selected button, otherwise `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGroupResolver;

impl GroupResolver for DefaultGroupResolver {
    fn resolve_checkbox(&self, elements: &[InputElement]) -> GroupValue {
        match elements {
            [] => GroupValue::invalid(Value::Bool(false)),
            [single] => {
                if !single.is_selected() {
                    return GroupValue::invalid(Value::Bool(false));
                }
                if single.has_value_attribute && !single.raw_value.is_empty() {
                    GroupValue::valid(Value::String(single.raw_value.clone()))
                } else {
                    GroupValue::valid(Value::Bool(true))
                }
            }
            many => {
                let values: Vec<Value> = many
                    .iter()
                    .filter(|element| element.is_selected())
                    .map(|element| Value::String(element.raw_value.clone()))
                    .collect();
                let is_valid = !values.is_empty();
                GroupValue {
                    value: Value::Array(values),
                    is_valid,
                }
            }
        }
    }

    fn resolve_radio(&self, elements: &[InputElement]) -> GroupValue {
        elements
            .iter()
            .rev()
            .find(|element| element.is_selected())
            .map_or_else(
                || GroupValue::invalid(Value::Null),
                |element| GroupValue::valid(Value::String(element.raw_value.clone())),
            )
    }
}
