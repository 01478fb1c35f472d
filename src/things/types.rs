//! Things JSON items and the envelope that carries them.
//!
//! Items serialize to the shape the `things:///json` command expects:
//!
//! ```text
//! [{"type":"to-do","attributes":{"title":"Buy milk","tags":["errands"]}}]
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::DateResolver;
use crate::error::TparseError;
use crate::things::schema::schema_for;

/// Coerced attributes of one item, keyed by Things attribute name.
pub type Attributes = Map<String, Value>;

/// Caller-supplied attributes before whitelisting and coercion.
pub type RawAttributes = BTreeMap<String, RawValue>;

/// An attribute value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A string, possibly `"true"`/`"false"` or a date phrase.
    Text(String),
    /// Several strings.
    List(Vec<String>),
    /// A real boolean.
    Bool(bool),
    /// Nested items, e.g. checklist items of a to-do.
    Items(Vec<ThingsItem>),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// The kinds of item Things can import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A to-do, optionally filed under a list or heading.
    Todo,
    /// A new project.
    Project,
    /// A heading inside a project.
    Heading,
    /// A checklist item nested in a to-do.
    ChecklistItem,
}

impl ItemKind {
    /// The `type` string used in Things JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "to-do",
            Self::Project => "project",
            Self::Heading => "heading",
            Self::ChecklistItem => "checklist-item",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an item is created or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Make a new item.
    #[default]
    Create,
    /// Change an existing item.
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
        })
    }
}

/// Attributes plus the operation metadata shared by every item kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub operation: Operation,
    /// Things ID of the item to update; only set for updates.
    pub id: Option<String>,
    pub attributes: Attributes,
}

/// One item of a Things JSON import.
#[derive(Debug, Clone, PartialEq)]
pub enum ThingsItem {
    Todo(ItemData),
    Project(ItemData),
    Heading(ItemData),
    ChecklistItem(ItemData),
}

impl ThingsItem {
    /// Build an item to create.
    ///
    /// Only attributes on the kind's whitelist are kept, each coerced to
    /// its JSON type; empty values are skipped.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::InvalidParams` if no attribute survives.
    pub fn create(
        kind: ItemKind,
        raw: &RawAttributes,
        resolver: &DateResolver,
    ) -> Result<Self, TparseError> {
        let data = ItemData {
            operation: Operation::Create,
            id: None,
            attributes: coerce_attributes(kind, raw, resolver)?,
        };
        Ok(Self::from_parts(kind, data))
    }

    /// Build an item that updates the existing item `id`.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::InvalidParams` if no attribute survives or the
    /// id is blank.
    pub fn update(
        kind: ItemKind,
        id: &str,
        raw: &RawAttributes,
        resolver: &DateResolver,
    ) -> Result<Self, TparseError> {
        if id.trim().is_empty() {
            return Err(TparseError::InvalidParams(format!("{kind} update needs an id")));
        }
        let data = ItemData {
            operation: Operation::Update,
            id: Some(id.trim().to_string()),
            attributes: coerce_attributes(kind, raw, resolver)?,
        };
        Ok(Self::from_parts(kind, data))
    }

    fn from_parts(kind: ItemKind, data: ItemData) -> Self {
        match kind {
            ItemKind::Todo => Self::Todo(data),
            ItemKind::Project => Self::Project(data),
            ItemKind::Heading => Self::Heading(data),
            ItemKind::ChecklistItem => Self::ChecklistItem(data),
        }
    }

    /// The item kind.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Todo(_) => ItemKind::Todo,
            Self::Project(_) => ItemKind::Project,
            Self::Heading(_) => ItemKind::Heading,
            Self::ChecklistItem(_) => ItemKind::ChecklistItem,
        }
    }

    /// Operation metadata and attributes.
    #[must_use]
    pub const fn data(&self) -> &ItemData {
        match self {
            Self::Todo(data)
            | Self::Project(data)
            | Self::Heading(data)
            | Self::ChecklistItem(data) => data,
        }
    }

    /// The coerced attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.data().attributes
    }

    /// The item's title, if it has one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.attributes().get("title").and_then(Value::as_str)
    }

    fn envelope(&self, reveal: bool) -> Envelope<'_> {
        let data = self.data();
        let update = data.operation == Operation::Update;
        Envelope {
            kind: self.kind().as_str(),
            attributes: &data.attributes,
            operation: update.then_some(data.operation),
            id: if update { data.id.as_deref() } else { None },
            reveal,
        }
    }
}

impl Serialize for ThingsItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.envelope(false).serialize(serializer)
    }
}

/// Wire shape of one item.
#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    attributes: &'a Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    reveal: bool,
}

/// Walk the kind's whitelist and coerce the matching raw values.
fn coerce_attributes(
    kind: ItemKind,
    raw: &RawAttributes,
    resolver: &DateResolver,
) -> Result<Attributes, TparseError> {
    let mut attributes = Attributes::new();
    for (name, coercion) in schema_for(kind) {
        let Some(value) = raw.get(*name) else {
            continue;
        };
        match coercion.apply(value, resolver) {
            Some(coerced) => {
                attributes.insert((*name).to_string(), coerced);
            },
            None => log::debug!("{kind}: skipping empty or invalid {name} {value:?}"),
        }
    }

    if attributes.is_empty() {
        return Err(TparseError::no_valid_attributes(kind.as_str()));
    }
    Ok(attributes)
}

/// The list of items sent to Things in one import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThingsContainer {
    items: Vec<ThingsItem>,
    reveal: bool,
}

impl ThingsContainer {
    /// Wrap items for export.
    #[must_use]
    pub const fn new(items: Vec<ThingsItem>) -> Self {
        Self {
            items,
            reveal: false,
        }
    }

    /// Ask Things to show each item after importing it.
    #[must_use]
    pub const fn with_reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    /// Flip the reveal flag.
    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    /// Whether items are revealed after import.
    #[must_use]
    pub const fn reveal(&self) -> bool {
        self.reveal
    }

    /// The wrapped items.
    #[must_use]
    pub fn items(&self) -> &[ThingsItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Serialize to the compact JSON array Things imports.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Json` if serialization fails.
    pub fn export(&self) -> Result<String, TparseError> {
        let envelopes: Vec<Envelope<'_>> =
            self.items.iter().map(|item| item.envelope(self.reveal)).collect();
        Ok(serde_json::to_string(&envelopes)?)
    }
}
