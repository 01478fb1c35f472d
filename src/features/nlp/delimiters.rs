//! The sigil table.
//!
//! Each field that can be written inline is introduced by a one- or
//! two-character sigil. The table drives both splitting a line into
//! fragments and mapping a fragment back to its field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::Field;

/// Opens and closes a templated block.
pub const BLOCK_FENCE: &str = "``";

/// Escapes the sigil that follows it.
pub const ESCAPE: char = '\\';

/// Field ↔ sigil pairs.
///
/// `>` also stands for "due"; it resolves to [`Field::Deadline`].
pub const DELIMITERS: [(Field, &str); 7] = [
    (Field::Tags, "#"),
    (Field::Project, "["),
    (Field::NewProject, "[["),
    (Field::Notes, "::"),
    (Field::Heading, "=="),
    (Field::Deadline, ">"),
    (Field::ChecklistItems, "*"),
];

/// Alternation of every sigil, two-character sigils first so that `[[`
/// wins over `[` at the same position.
pub static SIGIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut sigils: Vec<&str> = DELIMITERS.iter().map(|(_, s)| *s).collect();
    sigils.sort_by_key(|s| std::cmp::Reverse(s.len()));
    let alternation = sigils
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).unwrap_or_else(|e| panic!("Invalid sigil regex: {e}"))
});

/// The sigil that introduces `field`, if it has one.
#[must_use]
pub fn sigil_for(field: Field) -> Option<&'static str> {
    DELIMITERS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, sigil)| *sigil)
}

/// The field introduced by exactly `sigil`.
#[must_use]
pub fn field_for(sigil: &str) -> Option<Field> {
    DELIMITERS
        .iter()
        .find(|(_, s)| *s == sigil)
        .map(|(field, _)| *field)
}

/// Classify a fragment by its leading sigil.
///
/// A two-character sigil is preferred over its one-character prefix.
/// Returns the field and the byte length of the sigil.
#[must_use]
pub fn leading_sigil(fragment: &str) -> Option<(Field, usize)> {
    [2, 1].into_iter().find_map(|len| {
        fragment
            .get(..len)
            .and_then(field_for)
            .map(|field| (field, len))
    })
}

/// The closing bracket matching a bracketed sigil.
#[must_use]
pub const fn closing_bracket(field: Field) -> Option<&'static str> {
    match field {
        Field::Project => Some("]"),
        Field::NewProject => Some("]]"),
        _ => None,
    }
}
