//! Command implementations for tparse.
//!
//! Every command returns the text to print; `main` prints it when non-empty.

mod input;

use std::path::Path;

pub use input::{parser_for, read_input, resolver_for};

use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{Cli, ExportArgs, InputArgs, OutputFormat};
use crate::config::Config;
use crate::error::TparseError;
use crate::output::{format_lines, format_payload, format_url, to_json};
use crate::things::{CallbackUrl, ThingsAdapter, ThingsContainer};

/// Execute the parse command
///
/// # Errors
///
/// Returns an error if the input cannot be read, `--now` is invalid, or a
/// line cannot be tokenized.
pub fn parse(args: &InputArgs, config: &Config, format: OutputFormat) -> Result<String, TparseError> {
    let parser = parser_for(args, config)?;
    let lines = parser.parse(&read_input(args.file.as_deref())?)?;
    format_lines(&lines, format)
}

/// Execute the export command
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or serialized.
pub fn export(args: &ExportArgs, config: &Config, format: OutputFormat) -> Result<String, TparseError> {
    let container = build_container(args, config)?;
    format_payload(&container, format)
}

/// Execute the url command
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or serialized.
pub fn url(args: &ExportArgs, config: &Config, format: OutputFormat) -> Result<String, TparseError> {
    let container = build_container(args, config)?;
    format_url(&callback_url(&container, config)?, format)
}

/// Execute the send command
///
/// An empty import is reported and never handed to Things.
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, or the URL cannot be
/// opened (including on platforms other than macOS).
pub fn send(args: &ExportArgs, config: &Config, format: OutputFormat) -> Result<String, TparseError> {
    let container = build_container(args, config)?;

    if !container.is_empty() {
        callback_url(&container, config)?.open()?;
    }

    match format {
        OutputFormat::Json => to_json(&json!({ "sent": container.len() })),
        OutputFormat::Pretty if container.is_empty() => Ok("Nothing to send".to_string()),
        OutputFormat::Pretty => Ok(format!(
            "{} Sent {} item(s) to Things",
            "✓".green(),
            container.len()
        )),
    }
}

/// Execute the init command
///
/// An existing file is only replaced with `force`.
///
/// # Errors
///
/// Returns `TparseError::Config` if the file exists or cannot be written.
pub fn init(path: &Path, force: bool, format: OutputFormat) -> Result<String, TparseError> {
    if path.exists() && !force {
        return Err(TparseError::Config(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }
    Config::default().save_to_path(path)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "config": path.display().to_string() })),
        OutputFormat::Pretty => Ok(format!("{} Wrote {}", "✓".green(), path.display())),
    }
}

/// Execute the completions command
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tparse", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Parse the input and adapt it into an import.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn build_container(args: &ExportArgs, config: &Config) -> Result<ThingsContainer, TparseError> {
    let parser = parser_for(&args.input, config)?;
    let lines = parser.parse(&read_input(args.input.file.as_deref())?)?;
    let container = ThingsAdapter::new(parser.line_parser().resolver()).create(&lines)?;
    Ok(container.with_reveal(args.reveal || config.export.reveal))
}

fn callback_url(container: &ThingsContainer, config: &Config) -> Result<CallbackUrl, TparseError> {
    let mut url = CallbackUrl::for_container(&config.export.base_url, container)?;
    if container.reveal() {
        url.add_parameter("reveal", "true");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("todo.txt");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn export_args(file: PathBuf, reveal: bool) -> ExportArgs {
        ExportArgs {
            input: InputArgs {
                file: Some(file),
                when: false,
                now: Some("2026-10-21T10:00:00".to_string()),
            },
            reveal,
        }
    }

    #[test]
    fn test_export_json_payload() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "Buy milk [Home] #errands\n");

        let output = export(&export_args(path, false), &Config::default(), OutputFormat::Json).unwrap();
        assert!(!output.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!([{
                "type": "to-do",
                "attributes": {"title": "Buy milk", "list": "Home", "tags": ["errands"]}
            }])
        );
    }

    #[test]
    fn test_url_with_reveal() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "Buy milk\n");

        let output = url(&export_args(path, true), &Config::default(), OutputFormat::Pretty).unwrap();
        assert!(output.starts_with("things:///json?data=%5B%7B"));
        assert!(output.ends_with("&reveal=true"));
    }

    #[test]
    fn test_config_reveal_applies() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "Buy milk\n");
        let mut config = Config::default();
        config.export.reveal = true;

        let container = build_container(&export_args(path, false), &config).unwrap();
        assert!(container.reveal());
    }

    #[test]
    fn test_parse_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "Pay rent > 2026-11-01\n");
        let args = export_args(path, false).input;

        let output = parse(&args, &Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["lines"][0]["fields"]["deadline"], "2026-11-01T10:00:00");
    }

    #[test]
    fn test_send_empty_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "\n\n");

        let output = send(&export_args(path, false), &Config::default(), OutputFormat::Json).unwrap();
        assert!(output.contains("\"sent\": 0"));
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".tparse").join("config.yaml");

        init(&path, false, OutputFormat::Pretty).unwrap();
        let loaded = Config::load_from_path(&path).unwrap();
        assert!(loaded.parser.roll_past_dates);
        assert_eq!(loaded.export.base_url, "things:///json?");
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "parser:\n  extract_when: true\n").unwrap();

        let err = init(&path, false, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, TparseError::Config(_)));
        assert!(Config::load_from_path(&path).unwrap().parser.extract_when);

        init(&path, true, OutputFormat::Json).unwrap();
        assert!(!Config::load_from_path(&path).unwrap().parser.extract_when);
    }

    #[test]
    fn test_completions_mentions_binary() {
        let script = completions(Shell::Bash);
        assert!(script.contains("tparse"));
    }
}
