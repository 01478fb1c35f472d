//! Core abstractions for tparse.
//!
//! This module provides the field vocabulary and the date resolver shared
//! by the parser and the Things adapter.

mod datetime;
mod fields;

pub use datetime::{
    format_iso, parse_reference, DateParseResult, DateResolver, TitleDate, ISO_FORMAT,
};
pub use fields::{Field, FieldMap, FieldValue};
