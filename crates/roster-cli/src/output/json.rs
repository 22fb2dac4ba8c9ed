use roster_core::error::RosterError;
use roster_core::model::NormalizedTable;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Render a table as a JSON array of records, one object per row.
///
/// Repeated column names become distinct keys: the second `Name` is written
/// as `Name.1`, the third as `Name.2`.
pub fn to_records(table: &NormalizedTable) -> Value {
    let keys = record_keys(table.columns());
    let records = table
        .rows()
        .iter()
        .map(|row| {
            let record: Map<String, Value> = keys
                .iter()
                .cloned()
                .zip(row.iter().map(|cell| Value::String(cell.clone())))
                .collect();
            Value::Object(record)
        })
        .collect();
    Value::Array(records)
}

fn record_keys(columns: &[String]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut keys = Vec::with_capacity(columns.len());
    for column in columns {
        let mut key = column.clone();
        let mut n = 1;
        while taken.contains(&key) {
            key = format!("{column}.{n}");
            n += 1;
        }
        taken.insert(key.clone());
        keys.push(key);
    }
    keys
}

pub fn print(table: &NormalizedTable) -> Result<(), RosterError> {
    let json = serde_json::to_string_pretty(&to_records(table))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(columns: &[&str], rows: &[&[&str]]) -> NormalizedTable {
        NormalizedTable::from_rows(
            columns.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_one_record_per_row() {
        let records = to_records(&table(&["Roll No", "Name"], &[&["1", "ALI"], &["2", ""]]));
        assert_eq!(
            records,
            json!([{"Roll No": "1", "Name": "ALI"}, {"Roll No": "2", "Name": ""}])
        );
    }

    #[test]
    fn test_duplicate_columns_get_suffixes() {
        let records = to_records(&table(
            &["Name", "Gender", "Name", "Name"],
            &[&["ALI", "Male", "Adnan", "Zubair"]],
        ));
        assert_eq!(
            records,
            json!([{"Name": "ALI", "Gender": "Male", "Name.1": "Adnan", "Name.2": "Zubair"}])
        );
    }

    #[test]
    fn test_suffix_skips_existing_column_name() {
        let keys = record_keys(&["Name".into(), "Name.1".into(), "Name".into()]);
        assert_eq!(keys, ["Name", "Name.1", "Name.2"]);
    }

    #[test]
    fn test_empty_table_is_empty_array() {
        assert_eq!(to_records(&NormalizedTable::default()), json!([]));
    }
}
