//! Output formatting for tparse.
//!
//! This module provides formatters for displaying parse results and Things
//! payloads in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TparseError;
use crate::features::nlp::Line;
use crate::things::{CallbackUrl, ThingsContainer};

pub use json::*;
pub use pretty::*;

/// Format parsed lines based on output format
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn format_lines(lines: &[Line], format: OutputFormat) -> Result<String, TparseError> {
    match format {
        OutputFormat::Pretty => Ok(format_lines_pretty(lines)),
        OutputFormat::Json => format_lines_json(lines),
    }
}

/// Format an export based on output format
///
/// Pretty output lists the items above the payload; JSON output is the
/// payload alone.
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn format_payload(container: &ThingsContainer, format: OutputFormat) -> Result<String, TparseError> {
    match format {
        OutputFormat::Pretty => Ok(format!(
            "{}\n{}",
            format_items_pretty(container),
            format_payload_json(container)?
        )),
        OutputFormat::Json => format_payload_json(container),
    }
}

/// Format a callback URL based on output format
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn format_url(url: &CallbackUrl, format: OutputFormat) -> Result<String, TparseError> {
    match format {
        OutputFormat::Pretty => Ok(url.to_url()),
        OutputFormat::Json => format_url_json(url),
    }
}
