//! The closed field vocabulary shared by the tokenizer, the block engine
//! and the Things adapter.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// A field that can be extracted from one line of text.
///
/// Declaration order is the order fields appear in a [`FieldMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// Text before the first sigil.
    Title,
    /// Date resolved out of the title.
    When,
    /// `#tag`
    Tags,
    /// `[Project]`
    Project,
    /// `[[New project]]`
    NewProject,
    /// `:: notes`
    Notes,
    /// `== Heading`
    Heading,
    /// `> date`
    Deadline,
    /// `* item`
    ChecklistItems,
}

impl Field {
    /// Every field, in map order.
    pub const ALL: [Self; 9] = [
        Self::Title,
        Self::When,
        Self::Tags,
        Self::Project,
        Self::NewProject,
        Self::Notes,
        Self::Heading,
        Self::Deadline,
        Self::ChecklistItems,
    ];

    /// The kebab-case name used in output and configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::When => "when",
            Self::Tags => "tags",
            Self::Project => "project",
            Self::NewProject => "new-project",
            Self::Notes => "notes",
            Self::Heading => "heading",
            Self::Deadline => "deadline",
            Self::ChecklistItems => "checklist-items",
        }
    }

    /// Look up a field by name.
    ///
    /// `due` is accepted as an alias of `deadline`: both share the `>` sigil.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name == "due" {
            return Some(Self::Deadline);
        }
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Whether repeated occurrences on one line accumulate into a list.
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        matches!(self, Self::Tags | Self::ChecklistItems)
    }

    /// Whether the raw value is a date phrase to resolve.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Deadline)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value of one extracted field.
///
/// Multi-valued fields holding a single element are stored as `Text`, so
/// consumers handle both shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// One string.
    Text(String),
    /// Several strings, in source order.
    List(Vec<String>),
}

impl FieldValue {
    /// An empty string or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// The value as a single string, if it is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// The value as a list, wrapping a scalar into one element.
    #[must_use]
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::Text(s) => vec![s.clone()],
            Self::List(items) => items.clone(),
        }
    }

    /// Collapse a list: one element becomes `Text`.
    #[must_use]
    pub fn flattened(items: Vec<String>) -> Self {
        if items.len() == 1 {
            Self::Text(items.into_iter().next().unwrap_or_default())
        } else {
            Self::List(items)
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Fields extracted from one line, ordered by [`Field`].
pub type FieldMap = BTreeMap<Field, FieldValue>;
