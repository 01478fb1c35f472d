//! Command-line interface for tparse.

pub mod args;
pub mod commands;
