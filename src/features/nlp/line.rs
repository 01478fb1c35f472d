//! Line tokenizer.
//!
//! Splits one line of text before every sigil and turns each fragment into
//! a field:
//!
//! ```text
//! Buy milk #groceries #errands > friday :: semi-skimmed
//! ^title   ^tags      ^tags    ^deadline ^notes
//! ```

use std::collections::BTreeMap;

use regex::Regex;

use crate::core::{format_iso, DateResolver, Field, FieldMap, FieldValue};
use crate::error::TparseError;
use crate::features::nlp::delimiters::{
    closing_bracket, leading_sigil, DELIMITERS, ESCAPE, SIGIL_PATTERN,
};

/// One line of source text and the fields extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Line {
    /// The raw text the fields came from.
    pub source: String,
    /// The extracted fields.
    pub fields: FieldMap,
}

impl Line {
    /// Pair a source line with its fields.
    #[must_use]
    pub fn new(source: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            source: source.into(),
            fields,
        }
    }

    /// Look up one field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }
}

/// Turns single lines into [`FieldMap`]s.
#[derive(Debug, Clone, Copy)]
pub struct LineParser {
    resolver: DateResolver,
    extract_when: bool,
}

impl LineParser {
    /// A parser resolving dates with `resolver`.
    #[must_use]
    pub const fn new(resolver: DateResolver) -> Self {
        Self {
            resolver,
            extract_when: false,
        }
    }

    /// Also pull a `when` date out of the title text.
    #[must_use]
    pub const fn with_when(mut self, enabled: bool) -> Self {
        self.extract_when = enabled;
        self
    }

    /// The resolver used for date fields.
    #[must_use]
    pub const fn resolver(&self) -> &DateResolver {
        &self.resolver
    }

    /// Extract the fields of one line.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Tokenizer` if a fragment after the first does
    /// not start with a sigil, which means the delimiter table and the
    /// splitting pattern disagree.
    pub fn parse_line(&self, line: &str) -> Result<FieldMap, TparseError> {
        let escaped = escape_sigils(line);
        let mut title_parts: Vec<String> = Vec::new();
        let mut singles: BTreeMap<Field, String> = BTreeMap::new();
        let mut lists: BTreeMap<Field, Vec<String>> = BTreeMap::new();

        for (index, fragment) in split_before(&SIGIL_PATTERN, &escaped).into_iter().enumerate() {
            if fragment.is_empty() {
                continue;
            }
            if index == 0 {
                title_parts.push(restore_sigils(fragment.trim()));
                continue;
            }

            let (field, sigil_len) = leading_sigil(fragment).ok_or_else(|| {
                TparseError::Tokenizer(format!(
                    "fragment {fragment:?} of line {line:?} does not start with a sigil"
                ))
            })?;

            let mut value = &fragment[sigil_len..];
            if let Some(close) = closing_bracket(field) {
                // "[[Garden]" still closes on its single bracket
                let closed = value.split_once(close).or_else(|| value.split_once(']'));
                if let Some((inside, rest)) = closed {
                    value = inside;
                    title_parts.push(restore_sigils(rest.trim()));
                }
            }

            let value = restore_sigils(value.trim());
            if value.is_empty() {
                continue;
            }
            if field.is_multi_valued() {
                lists.entry(field).or_default().push(value);
            } else {
                singles.insert(field, value);
            }
        }

        let mut fields = FieldMap::new();

        let mut title = title_parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if self.extract_when && !title.is_empty() {
            let split = self.resolver.split_title_date(&title);
            if let Some(when) = split.when {
                fields.insert(Field::When, FieldValue::Text(format_iso(when)));
                title = split.title;
            }
        }
        if !title.is_empty() {
            fields.insert(Field::Title, FieldValue::Text(title));
        }

        for (field, value) in singles {
            fields.insert(field, FieldValue::Text(value));
        }
        for (field, items) in lists {
            fields.insert(field, FieldValue::flattened(items));
        }

        self.resolve_dates(&mut fields);

        log::debug!("parsed line {line:?} into {} field(s)", fields.len());
        Ok(fields)
    }

    /// Replace raw date phrases in date-bearing fields with ISO timestamps.
    ///
    /// Explicit dates are kept even when already past.
    fn resolve_dates(&self, fields: &mut FieldMap) {
        for field in Field::ALL.into_iter().filter(Field::is_date) {
            let Some(raw) = fields.get(&field).and_then(FieldValue::as_text) else {
                continue;
            };
            match self.resolver.resolve_iso(raw) {
                Some(iso) => {
                    fields.insert(field, FieldValue::Text(iso));
                }
                None => {
                    log::warn!("could not resolve {field} {raw:?}; dropping it");
                    fields.remove(&field);
                }
            }
        }
    }
}

/// Split `text` immediately before every match of `pattern`.
///
/// The first element is the text before the first match and may be empty.
fn split_before<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut prev = 0;
    for m in pattern.find_iter(text) {
        fragments.push(&text[prev..m.start()]);
        prev = m.start();
    }
    fragments.push(&text[prev..]);
    fragments
}

/// Placeholder for the escaped sigil at `index` in [`DELIMITERS`].
fn placeholder(index: usize) -> String {
    format!("\x00{index}\x00")
}

/// Hide escaped sigils (`\#`) from the splitter.
fn escape_sigils(line: &str) -> String {
    let mut order: Vec<usize> = (0..DELIMITERS.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(DELIMITERS[i].1.len()));

    order.into_iter().fold(line.to_string(), |text, i| {
        text.replace(&format!("{ESCAPE}{}", DELIMITERS[i].1), &placeholder(i))
    })
}

/// Turn placeholders back into literal sigils.
fn restore_sigils(text: &str) -> String {
    if !text.contains('\x00') {
        return text.to_string();
    }
    DELIMITERS
        .iter()
        .enumerate()
        .fold(text.to_string(), |text, (i, (_, sigil))| {
            text.replace(&placeholder(i), sigil)
        })
}
