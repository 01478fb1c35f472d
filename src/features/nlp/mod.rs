//! Sigil-driven parsing of annotated text.
//!
//! Turns text such as
//!
//! ```text
//! Buy milk #groceries > friday
//!
//! ``[Home] #weekend
//! Clean gutters
//! [Work] Call plumber``
//! ```
//!
//! into one [`Line`] of fields per source line.

mod block;
mod delimiters;
mod document;
mod line;

pub use block::{fill_from_template, Block};
pub use delimiters::{field_for, sigil_for, BLOCK_FENCE, DELIMITERS};
pub use document::{Parser, ParserOptions};
pub use line::{Line, LineParser};
