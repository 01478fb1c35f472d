//! Shared plumbing for commands that read a document.

use std::io::Read;
use std::path::Path;

use crate::cli::args::InputArgs;
use crate::config::Config;
use crate::core::{parse_reference, DateResolver};
use crate::error::TparseError;
use crate::features::nlp::{Parser, ParserOptions};

/// Read the document named by `file`; `None` or `-` reads stdin.
///
/// # Errors
///
/// Returns `TparseError::Io` if the file or stdin cannot be read.
pub fn read_input(file: Option<&Path>) -> Result<String, TparseError> {
    match file {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// The resolver for `--now`, or the current time.
///
/// # Errors
///
/// Returns `TparseError::InvalidDate` if `now` is not an ISO date or datetime.
pub fn resolver_for(now: Option<&str>) -> Result<DateResolver, TparseError> {
    match now {
        Some(value) => parse_reference(value).map(DateResolver::new).ok_or_else(|| {
            TparseError::InvalidDate(format!(
                "'{value}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)"
            ))
        }),
        None => Ok(DateResolver::now()),
    }
}

/// Build a parser from CLI flags layered over the config file.
///
/// # Errors
///
/// Returns `TparseError::InvalidDate` for a bad `--now`.
pub fn parser_for(args: &InputArgs, config: &Config) -> Result<Parser, TparseError> {
    let options = ParserOptions {
        extract_when: args.when || config.parser.extract_when,
        ..config.parser.options()
    };
    Ok(Parser::new(resolver_for(args.now.as_deref())?, options))
}
