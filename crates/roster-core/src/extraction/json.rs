use serde_json::{Map, Value};

use crate::error::RosterError;
use crate::model::NormalizedTable;

/// Read a JSON document into a table of strings.
///
/// Accepted layouts:
/// - records: `[{"Name": "ALI", ...}, ...]`
/// - column arrays: `{"Name": ["ALI", "SANA"], ...}`
/// - column objects: `{"Name": {"0": "ALI", "1": "SANA"}, ...}`
pub fn read_json(bytes: &[u8]) -> Result<NormalizedTable, RosterError> {
    let value: Value = serde_json::from_slice(bytes)?;

    match value {
        Value::Array(items) => from_records(&items),
        Value::Object(map) => from_columns(&map),
        other => Err(RosterError::JsonLayout(format!(
            "expected an array or object at the top level, found {}",
            kind_name(&other)
        ))),
    }
}

fn from_records(items: &[Value]) -> Result<NormalizedTable, RosterError> {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        let Value::Object(record) = item else {
            return Err(RosterError::JsonLayout(format!(
                "expected every record to be an object, found {}",
                kind_name(item)
            )));
        };
        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|record| {
            columns
                .iter()
                .map(|c| record.get(c).map(value_as_string).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(NormalizedTable::from_rows(columns, rows))
}

fn from_columns(map: &Map<String, Value>) -> Result<NormalizedTable, RosterError> {
    let columns: Vec<String> = map.keys().cloned().collect();

    // Column objects are keyed by row label; rows follow first appearance.
    let mut labels: Vec<&str> = Vec::new();
    let mut height = 0;
    for (name, column) in map {
        match column {
            Value::Array(values) => height = height.max(values.len()),
            Value::Object(cells) => {
                for label in cells.keys() {
                    if !labels.contains(&label.as_str()) {
                        labels.push(label);
                    }
                }
            }
            other => {
                return Err(RosterError::JsonLayout(format!(
                    "column '{name}' must be an array or object, found {}",
                    kind_name(other)
                )));
            }
        }
    }
    let height = height.max(labels.len());

    let rows = (0..height)
        .map(|i| {
            map.values()
                .map(|column| {
                    let cell = match column {
                        Value::Array(values) => values.get(i),
                        Value::Object(cells) => labels.get(i).and_then(|l| cells.get(*l)),
                        _ => None,
                    };
                    cell.map(value_as_string).unwrap_or_default()
                })
                .collect()
        })
        .collect();

    Ok(NormalizedTable::from_rows(columns, rows))
}

/// Render a JSON value as a cell string.
fn value_as_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".into(),
        Value::Bool(false) => "False".into(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
