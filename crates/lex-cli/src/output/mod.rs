use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns that lead a table when present, in this order. Remaining columns
/// follow alphabetically.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "start",
    "end",
    "original",
    "suggestion",
    "severity",
    "type",
    "source_lang",
    "target_lang",
    "source_term",
    "target_term",
    "term_type",
    "language",
    "pattern",
    "replacement",
    "rule_type",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let objects = items.iter().filter_map(Value::as_object).collect::<Vec<_>>();
    if objects.len() != items.len() {
        let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
        return table::render(&["value"], &rows, table_options());
    }

    let columns = column_order(&objects);
    let headers = columns.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = objects
        .iter()
        .map(|map| {
            columns
                .iter()
                .map(|column| map.get(column).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render(&headers, &rows, table_options())
}

/// Columns present in any row, dropping those that are null everywhere.
fn column_order(objects: &[&Map<String, Value>]) -> Vec<String> {
    let mut present = Vec::<String>::new();
    for map in objects {
        for (key, value) in *map {
            if !value.is_null() && !present.contains(key) {
                present.push(key.clone());
            }
        }
    }

    let mut ordered = LEADING_COLUMNS
        .iter()
        .filter(|column| present.iter().any(|key| key == *column))
        .map(|column| (*column).to_string())
        .collect::<Vec<_>>();
    let mut rest = present
        .into_iter()
        .filter(|key| !LEADING_COLUMNS.contains(&key.as_str()))
        .collect::<Vec<_>>();
    rest.sort();
    ordered.extend(rest);
    ordered
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Object(map) if map.values().all(|v| !v.is_object() && !v.is_array()) => map
            .iter()
            .map(|(key, value)| format!("{key}={}", value_to_cell(value)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
