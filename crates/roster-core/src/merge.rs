use std::collections::HashMap;

use crate::model::{CombinedTable, NormalizedTable};

/// Append `table` beneath `combined`, aligning cells by column name.
///
/// Columns only present in `table` are appended to `combined` (existing rows
/// get empty cells); columns only present in `combined` are left empty for
/// the new rows. When a name repeats, the n-th occurrence in `table` lines up
/// with the n-th occurrence in `combined`. No deduplication is done.
pub fn merge_into(combined: &mut CombinedTable, table: NormalizedTable) {
    let (columns, rows) = table.into_parts();

    if combined.columns().is_empty() && combined.row_count() == 0 {
        *combined = NormalizedTable::from_rows(columns, rows);
        return;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut targets = Vec::with_capacity(columns.len());
    for name in &columns {
        let occurrence = seen.entry(name.as_str()).or_insert(0);
        let target = match nth_position(combined.columns(), name, *occurrence) {
            Some(idx) => idx,
            None => {
                combined.push_column(name.clone());
                combined.columns().len() - 1
            }
        };
        *occurrence += 1;
        targets.push(target);
    }

    let width = combined.columns().len();
    for row in rows {
        let mut aligned = vec![String::new(); width];
        for (cell, &target) in row.into_iter().zip(&targets) {
            aligned[target] = cell;
        }
        combined.push_row(aligned);
    }
}

fn nth_position(columns: &[String], name: &str, n: usize) -> Option<usize> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.as_str() == name)
        .nth(n)
        .map(|(i, _)| i)
}
