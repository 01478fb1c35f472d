//! Attribute whitelists for each item kind.
//!
//! Names follow the Things JSON command reference. Anything not listed for
//! a kind is dropped when the item is built.

use serde_json::Value;

use crate::core::{format_iso, DateResolver};
use crate::things::types::{ItemKind, RawValue};

/// How a raw value becomes a JSON attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Plain string.
    Text,
    /// `"true"`/`"false"` (any case) to a JSON boolean.
    Bool,
    /// Date phrase to an ISO 8601 timestamp.
    Date,
    /// String array; a scalar becomes a one-element array.
    TextList,
    /// Array of nested items.
    Items,
}

impl Coercion {
    /// Coerce `value`, returning `None` when it is empty or does not fit.
    #[must_use]
    pub fn apply(&self, value: &RawValue, resolver: &DateResolver) -> Option<Value> {
        match (self, value) {
            (Self::Text, RawValue::Text(s)) => non_empty(s).map(|s| Value::String(s.to_string())),
            (Self::Text, RawValue::List(items)) => {
                let joined = items.join("\n");
                non_empty(&joined).map(|s| Value::String(s.to_string()))
            },
            (Self::Bool, RawValue::Bool(b)) => Some(Value::Bool(*b)),
            (Self::Bool, RawValue::Text(s)) => match s.trim().to_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            (Self::Date, RawValue::Text(s)) => non_empty(s)
                .and_then(|s| resolver.resolve_naive(s))
                .map(|dt| Value::String(format_iso(dt))),
            (Self::TextList, RawValue::Text(s)) => {
                non_empty(s).map(|s| Value::Array(vec![Value::String(s.to_string())]))
            },
            (Self::TextList, RawValue::List(items)) => {
                let items: Vec<Value> = items
                    .iter()
                    .filter_map(|s| non_empty(s))
                    .map(|s| Value::String(s.to_string()))
                    .collect();
                (!items.is_empty()).then_some(Value::Array(items))
            },
            (Self::Items, RawValue::Items(items)) if !items.is_empty() => {
                serde_json::to_value(items).ok()
            },
            _ => None,
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

const TODO: &[(&str, Coercion)] = &[
    ("title", Coercion::Text),
    ("notes", Coercion::Text),
    ("prepend-notes", Coercion::Text),
    ("append-notes", Coercion::Text),
    ("when", Coercion::Text),
    ("deadline", Coercion::Text),
    ("tags", Coercion::TextList),
    ("add-tags", Coercion::TextList),
    ("checklist-items", Coercion::Items),
    ("prepend-checklist-items", Coercion::Items),
    ("append-checklist-items", Coercion::Items),
    ("list-id", Coercion::Text),
    ("list", Coercion::Text),
    ("heading-id", Coercion::Text),
    ("heading", Coercion::Text),
    ("completed", Coercion::Bool),
    ("canceled", Coercion::Bool),
    ("creation-date", Coercion::Date),
    ("completion-date", Coercion::Date),
];

const PROJECT: &[(&str, Coercion)] = &[
    ("title", Coercion::Text),
    ("notes", Coercion::Text),
    ("prepend-notes", Coercion::Text),
    ("append-notes", Coercion::Text),
    ("when", Coercion::Text),
    ("deadline", Coercion::Text),
    ("tags", Coercion::TextList),
    ("add-tags", Coercion::TextList),
    ("area-id", Coercion::Text),
    ("area", Coercion::Text),
    ("items", Coercion::Items),
    ("completed", Coercion::Bool),
    ("canceled", Coercion::Bool),
    ("creation-date", Coercion::Date),
    ("completion-date", Coercion::Date),
];

const HEADING: &[(&str, Coercion)] = &[
    ("title", Coercion::Text),
    ("archived", Coercion::Bool),
    ("creation-date", Coercion::Date),
    ("completion-date", Coercion::Date),
];

const CHECKLIST_ITEM: &[(&str, Coercion)] = &[
    ("title", Coercion::Text),
    ("completed", Coercion::Bool),
    ("canceled", Coercion::Bool),
    ("creation-date", Coercion::Date),
    ("completion-date", Coercion::Date),
];

/// The whitelist for `kind`.
#[must_use]
pub const fn schema_for(kind: ItemKind) -> &'static [(&'static str, Coercion)] {
    match kind {
        ItemKind::Todo => TODO,
        ItemKind::Project => PROJECT,
        ItemKind::Heading => HEADING,
        ItemKind::ChecklistItem => CHECKLIST_ITEM,
    }
}
