//! JSON output formatting for tparse.

use serde::Serialize;
use serde_json::json;

use crate::error::TparseError;
use crate::features::nlp::Line;
use crate::things::{CallbackUrl, ThingsContainer};

/// Format parsed lines as JSON
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn format_lines_json(lines: &[Line]) -> Result<String, TparseError> {
    let output = json!({
        "count": lines.len(),
        "lines": lines
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a container as the compact payload Things imports
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn format_payload_json(container: &ThingsContainer) -> Result<String, TparseError> {
    container.export()
}

/// Format a callback URL as JSON
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn format_url_json(url: &CallbackUrl) -> Result<String, TparseError> {
    let output = json!({ "url": url.to_url() });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TparseError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TparseError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, FieldMap, FieldValue};

    fn make_line(source: &str, fields: &[(Field, FieldValue)]) -> Line {
        Line::new(source, fields.iter().cloned().collect::<FieldMap>())
    }

    #[test]
    fn test_format_lines_json_empty() {
        let result = format_lines_json(&[]).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"lines\": []"));
    }

    #[test]
    fn test_format_lines_json_fields() {
        let lines = vec![make_line(
            "Buy milk #a #b",
            &[
                (Field::Title, FieldValue::from("Buy milk")),
                (Field::Tags, FieldValue::List(vec!["a".into(), "b".into()])),
            ],
        )];
        let result = format_lines_json(&lines).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["lines"][0]["source"], "Buy milk #a #b");
        assert_eq!(parsed["lines"][0]["fields"]["title"], "Buy milk");
        assert_eq!(parsed["lines"][0]["fields"]["tags"][1], "b");
    }

    #[test]
    fn test_format_url_json() {
        let result = format_url_json(&CallbackUrl::default()).unwrap();
        assert!(result.contains("\"url\": \"things:///json?\""));
    }

    #[test]
    fn test_format_payload_json_is_compact() {
        let result = format_payload_json(&ThingsContainer::default()).unwrap();
        assert_eq!(result, "[]");
    }
}
