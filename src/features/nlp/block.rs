//! Templated blocks.
//!
//! The first line of a fenced block sets attributes every following line
//! inherits:
//!
//! ```text
//! ``[Home] #weekend
//! Clean gutters
//! [Work] Call plumber
//! Mow the lawn #garden``
//! ```
//!
//! "Clean gutters" lands in Home tagged weekend, "Call plumber" overrides
//! the project, "Mow the lawn" overrides the tag.

use crate::core::FieldMap;
use crate::error::TparseError;
use crate::features::nlp::line::{Line, LineParser};

/// A template line and the lines that inherit from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Fields of the first line.
    pub template: Line,
    /// Following lines, already merged with the template.
    pub lines: Vec<Line>,
}

impl Block {
    /// Parse a block from its template line and child lines.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Tokenizer` if any line fails to tokenize.
    pub fn parse<'a, I>(parser: &LineParser, template: &str, children: I) -> Result<Self, TparseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let template = Line::new(template, parser.parse_line(template)?);
        let mut block = Self {
            template,
            lines: Vec::new(),
        };
        for child in children {
            let fields = parser.parse_line(child)?;
            block.push(child, fields);
        }
        Ok(block)
    }

    /// Merge one parsed child line with the template and append it.
    pub fn push(&mut self, source: &str, fields: FieldMap) {
        let merged = fill_from_template(&self.template.fields, fields);
        self.lines.push(Line::new(source, merged));
    }

    /// The template followed by every merged line, in source order.
    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        std::iter::once(self.template).chain(self.lines).collect()
    }
}

/// Start from the template and overlay every non-empty child value.
///
/// Only one level of fallback: an empty child value defers to the template
/// even when the template's own value is empty. Lists override rather than
/// concatenate.
#[must_use]
pub fn fill_from_template(template: &FieldMap, child: FieldMap) -> FieldMap {
    let mut merged = template.clone();
    for (field, value) in child {
        if !value.is_empty() {
            merged.insert(field, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DateResolver, Field, FieldValue};
    use chrono::NaiveDate;

    fn parser() -> LineParser {
        let reference = NaiveDate::from_ymd_opt(2026, 10, 21)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        LineParser::new(DateResolver::new(reference))
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_child_inherits_template_project() {
        let block = Block::parse(&parser(), "[Home]", ["Clean gutters"]).unwrap();
        let child = &block.lines[0];
        assert_eq!(child.get(Field::Project), Some(&text("Home")));
        assert_eq!(child.get(Field::Title), Some(&text("Clean gutters")));
    }

    #[test]
    fn test_child_overrides_template_project() {
        let block = Block::parse(&parser(), "[Home]", ["[Work] Call plumber"]).unwrap();
        let child = &block.lines[0];
        assert_eq!(child.get(Field::Project), Some(&text("Work")));
        assert_eq!(child.get(Field::Title), Some(&text("Call plumber")));
    }

    #[test]
    fn test_lists_override_not_concatenate() {
        let block =
            Block::parse(&parser(), "[Home] #weekend #chores", ["Mow the lawn #garden"]).unwrap();
        assert_eq!(block.lines[0].get(Field::Tags), Some(&text("garden")));
    }

    #[test]
    fn test_template_deadline_is_inherited() {
        let block = Block::parse(&parser(), "> friday", ["Pay rent", "Call bank"]).unwrap();
        for line in &block.lines {
            assert_eq!(line.get(Field::Deadline), Some(&text("2026-10-23T10:00:00")));
        }
    }

    #[test]
    fn test_empty_child_value_defers_to_template() {
        let mut template = FieldMap::new();
        template.insert(Field::Notes, text("from template"));
        let mut child = FieldMap::new();
        child.insert(Field::Notes, text(""));
        child.insert(Field::Tags, FieldValue::List(vec![]));

        let merged = fill_from_template(&template, child);
        assert_eq!(merged.get(&Field::Notes), Some(&text("from template")));
        assert!(!merged.contains_key(&Field::Tags));
    }

    #[test]
    fn test_into_lines_puts_template_first() {
        let block = Block::parse(&parser(), "Chores [Home]", ["Vacuum", "Dishes"]).unwrap();
        let lines = block.into_lines();
        let titles: Vec<String> = lines
            .iter()
            .filter_map(|l| l.get(Field::Title).map(ToString::to_string))
            .collect();
        assert_eq!(titles, vec!["Chores", "Vacuum", "Dishes"]);
        assert!(lines
            .iter()
            .all(|l| l.get(Field::Project) == Some(&text("Home"))));
    }

    #[test]
    fn test_template_title_is_inherited_by_untitled_child() {
        let block = Block::parse(&parser(), "Chores [Home]", ["#urgent"]).unwrap();
        assert_eq!(block.lines[0].get(Field::Title), Some(&text("Chores")));
        assert_eq!(block.lines[0].get(Field::Tags), Some(&text("urgent")));
    }
}
