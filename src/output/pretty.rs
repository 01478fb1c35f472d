use std::fmt::Write;

use colored::Colorize;
use serde_json::Value;

use crate::core::{Field, FieldValue};
use crate::features::nlp::Line;
use crate::things::{ItemKind, ThingsContainer, ThingsItem};

/// Format parsed lines as a pretty listing
pub fn format_lines_pretty(lines: &[Line]) -> String {
    if lines.is_empty() {
        return "Parsed (0 lines)\n  No lines".to_string();
    }

    let mut output = format!("Parsed ({} lines)\n", lines.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for line in lines {
        let title = line
            .get(Field::Title)
            .map_or_else(|| "(untitled)".dimmed().to_string(), |t| t.to_string().bold().to_string());
        writeln!(output, "{title}").ok();

        for (field, value) in &line.fields {
            if *field == Field::Title {
                continue;
            }
            writeln!(output, "  {}: {}", field.as_str().dimmed(), color_value(*field, value)).ok();
        }
    }

    output
}

fn color_value(field: Field, value: &FieldValue) -> String {
    match field {
        Field::Tags => value
            .to_list()
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ")
            .cyan()
            .to_string(),
        Field::When | Field::Deadline => value.to_string().yellow().to_string(),
        Field::Project | Field::NewProject => value.to_string().magenta().to_string(),
        Field::ChecklistItems => value
            .to_list()
            .iter()
            .map(|i| format!("[ ] {i}"))
            .collect::<Vec<_>>()
            .join(", "),
        Field::Title | Field::Notes | Field::Heading => value.to_string(),
    }
}

/// Format the items of an export as a pretty listing
pub fn format_items_pretty(container: &ThingsContainer) -> String {
    if container.is_empty() {
        return "Items (0)\n  Nothing to import".to_string();
    }

    let mut output = format!("Items ({})\n", container.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for item in container.items() {
        output.push_str(&format_item_pretty(item));
        output.push('\n');
    }

    output
}

/// Format a single item on one line
pub fn format_item_pretty(item: &ThingsItem) -> String {
    let kind = match item.kind() {
        ItemKind::Todo => "[to-do]".white(),
        ItemKind::Project => "[project]".magenta(),
        ItemKind::Heading => "[heading]".blue(),
        ItemKind::ChecklistItem => "[item]".dimmed(),
    };

    let title = item.title().unwrap_or("(untitled)");
    let mut line = format!("{} {}", kind, title.bold());

    let attributes = item.attributes();
    if let Some(list) = attributes.get("list").and_then(Value::as_str) {
        write!(line, "  {}", list.dimmed()).ok();
    }
    for key in ["when", "deadline"] {
        if let Some(date) = attributes.get(key).and_then(Value::as_str) {
            write!(line, "  {}", format!("{key} {date}").yellow()).ok();
        }
    }
    if let Some(Value::Array(tags)) = attributes.get("tags") {
        let tags = tags
            .iter()
            .filter_map(Value::as_str)
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(line, "  {}", tags.cyan()).ok();
    }
    if let Some(Value::Array(items)) = attributes.get("checklist-items") {
        write!(line, "  {}", format!("({} checklist items)", items.len()).dimmed()).ok();
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DateResolver, FieldMap};
    use crate::things::{RawAttributes, RawValue};
    use chrono::NaiveDate;

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_lines_pretty_empty() {
        no_color();
        assert!(format_lines_pretty(&[]).contains("No lines"));
    }

    #[test]
    fn test_format_lines_pretty() {
        no_color();
        let mut fields = FieldMap::new();
        fields.insert(Field::Title, FieldValue::from("Buy milk"));
        fields.insert(Field::Tags, FieldValue::List(vec!["a".into(), "b".into()]));
        fields.insert(Field::Project, FieldValue::from("Home"));
        let output = format_lines_pretty(&[Line::new("Buy milk [Home] #a #b", fields)]);

        assert!(output.contains("Parsed (1 lines)"));
        assert!(output.contains("Buy milk"));
        assert!(output.contains("tags: #a #b"));
        assert!(output.contains("project: Home"));
    }

    #[test]
    fn test_format_untitled_line() {
        no_color();
        let mut fields = FieldMap::new();
        fields.insert(Field::Tags, FieldValue::from("x"));
        let output = format_lines_pretty(&[Line::new("#x", fields)]);
        assert!(output.contains("(untitled)"));
    }

    #[test]
    fn test_format_items_pretty() {
        no_color();
        let resolver = DateResolver::new(
            NaiveDate::from_ymd_opt(2026, 10, 21)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        let mut raw = RawAttributes::new();
        raw.insert("title".into(), RawValue::from("Buy milk"));
        raw.insert("list".into(), RawValue::from("Home"));
        raw.insert("tags".into(), RawValue::from("errands"));
        let item = ThingsItem::create(ItemKind::Todo, &raw, &resolver).unwrap();

        let output = format_items_pretty(&ThingsContainer::new(vec![item]));
        assert!(output.contains("Items (1)"));
        assert!(output.contains("[to-do] Buy milk"));
        assert!(output.contains("Home"));
        assert!(output.contains("#errands"));
    }

    #[test]
    fn test_format_items_pretty_empty() {
        no_color();
        assert!(format_items_pretty(&ThingsContainer::default()).contains("Nothing to import"));
    }
}
