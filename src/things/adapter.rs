//! Turns parsed lines into Things items.
//!
//! - A line with `[[New project]]` becomes a project.
//! - A line with only `== Heading` becomes a heading.
//! - Everything else becomes a to-do; `[Project]` picks its list and
//!   `* items` become nested checklist items.
//!
//! Lines that end up with no usable attribute are dropped.

use crate::core::{DateResolver, Field, FieldValue};
use crate::error::TparseError;
use crate::features::nlp::Line;
use crate::things::types::{ItemKind, RawAttributes, RawValue, ThingsContainer, ThingsItem};

/// Builds [`ThingsItem`]s from parsed [`Line`]s.
#[derive(Debug, Clone, Copy)]
pub struct ThingsAdapter<'a> {
    resolver: &'a DateResolver,
}

impl<'a> ThingsAdapter<'a> {
    /// An adapter coercing `*-date` attributes with `resolver`.
    #[must_use]
    pub const fn new(resolver: &'a DateResolver) -> Self {
        Self { resolver }
    }

    /// Convert every line, dropping lines with nothing to import.
    ///
    /// # Errors
    ///
    /// Propagates any error other than `TparseError::InvalidParams`.
    pub fn create(&self, lines: &[Line]) -> Result<ThingsContainer, TparseError> {
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            if let Some(item) = self.item_for(line)? {
                items.push(item);
            }
        }
        log::debug!("adapted {} of {} line(s)", items.len(), lines.len());
        Ok(ThingsContainer::new(items))
    }

    /// Convert one line.
    ///
    /// Returns `Ok(None)` when the line has no whitelisted, non-empty
    /// attribute.
    ///
    /// # Errors
    ///
    /// Propagates any error other than `TparseError::InvalidParams`.
    pub fn item_for(&self, line: &Line) -> Result<Option<ThingsItem>, TparseError> {
        let (kind, raw) = if line.get(Field::NewProject).is_some() {
            (ItemKind::Project, project_attributes(line))
        } else if line.get(Field::Heading).is_some() && line.get(Field::Title).is_none() {
            (ItemKind::Heading, heading_attributes(line))
        } else {
            (ItemKind::Todo, self.todo_attributes(line)?)
        };

        match ThingsItem::create(kind, &raw, self.resolver) {
            Ok(item) => Ok(Some(item)),
            Err(TparseError::InvalidParams(reason)) => {
                log::debug!("dropping line {:?}: {reason}", line.source);
                Ok(None)
            },
            Err(e) => Err(e),
        }
    }

    fn todo_attributes(&self, line: &Line) -> Result<RawAttributes, TparseError> {
        let mut raw = RawAttributes::new();
        copy(line, &mut raw, Field::Title, "title");
        copy(line, &mut raw, Field::Notes, "notes");
        copy(line, &mut raw, Field::When, "when");
        copy(line, &mut raw, Field::Deadline, "deadline");
        copy(line, &mut raw, Field::Tags, "tags");
        copy(line, &mut raw, Field::Project, "list");
        copy(line, &mut raw, Field::Heading, "heading");

        if let Some(value) = line.get(Field::ChecklistItems) {
            let mut items = Vec::new();
            for title in value.to_list() {
                let mut attrs = RawAttributes::new();
                attrs.insert("title".to_string(), RawValue::Text(title));
                match ThingsItem::create(ItemKind::ChecklistItem, &attrs, self.resolver) {
                    Ok(item) => items.push(item),
                    Err(TparseError::InvalidParams(_)) => {},
                    Err(e) => return Err(e),
                }
            }
            raw.insert("checklist-items".to_string(), RawValue::Items(items));
        }

        Ok(raw)
    }
}

fn project_attributes(line: &Line) -> RawAttributes {
    let mut raw = RawAttributes::new();
    copy(line, &mut raw, Field::NewProject, "title");
    copy(line, &mut raw, Field::Notes, "notes");
    copy(line, &mut raw, Field::When, "when");
    copy(line, &mut raw, Field::Deadline, "deadline");
    copy(line, &mut raw, Field::Tags, "tags");
    raw
}

fn heading_attributes(line: &Line) -> RawAttributes {
    let mut raw = RawAttributes::new();
    copy(line, &mut raw, Field::Heading, "title");
    raw
}

fn copy(line: &Line, raw: &mut RawAttributes, field: Field, name: &str) {
    if let Some(value) = line.get(field) {
        let value = match value {
            FieldValue::Text(s) => RawValue::Text(s.clone()),
            FieldValue::List(items) => RawValue::List(items.clone()),
        };
        raw.insert(name.to_string(), value);
    }
}
