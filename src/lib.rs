//! tparse - plain text to Things 3
//!
//! This crate parses lightly annotated plain text into Things 3 records and
//! serializes them into the JSON payload of the `things:///json` import URL.
//!
//! ```no_run
//! use tparse::{DateResolver, Parser, ParserOptions, ThingsAdapter};
//!
//! # fn main() -> Result<(), tparse::TparseError> {
//! let parser = Parser::new(DateResolver::now(), ParserOptions::default());
//! let lines = parser.parse("Buy milk [Home] #errands")?;
//! let container = ThingsAdapter::new(parser.line_parser().resolver()).create(&lines)?;
//! println!("{}", container.export()?);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod things;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{DateResolver, Field, FieldValue};
pub use error::TparseError;
pub use features::nlp::{Line, Parser, ParserOptions};
pub use things::{CallbackUrl, ThingsAdapter, ThingsContainer, ThingsItem};
