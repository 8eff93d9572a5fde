//! CSV serialization of the current candidate view.
//!
//! The encoder is pure text-in/text-out; writing the file (the "save as"
//! side of the export action) belongs to the caller. Cell rules match the
//! service UI exactly: every non-null value is quoted with embedded `"`
//! doubled, arrays are joined with `;`, and absent fields render as empty
//! cells, so a record decodes back to the original strings.

use ranker_api::types::Candidate;
use serde_json::Value;

/// Encodes the records as CSV. The column set is the union of keys
/// present across all records, in first-seen order; empty input encodes
/// to an empty string with no header row.
pub fn to_csv(records: &[Candidate]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<serde_json::Map<String, Value>> = records
        .iter()
        .map(|c| {
            serde_json::to_value(c)
                .ok()
                .and_then(|v| v.as_object().cloned())
                .unwrap_or_default()
        })
        .collect();

    let mut columns: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(columns.join(","));
    for row in &rows {
        let cells: Vec<String> = columns.iter().map(|key| cell(row.get(key))).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(";");
            quote(&joined)
        }
        Some(other) => quote(&scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // Numbers, booleans, and nested objects render as their compact
        // JSON text.
        other => other.to_string(),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
