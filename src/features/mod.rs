//! Feature implementations for tparse.
//!
//! This module contains the text parsing pipeline:
//! - Sigil table
//! - Line tokenizer
//! - Block templates
//! - Document splitting

pub mod nlp;
