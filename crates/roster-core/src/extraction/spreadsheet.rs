use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};

use crate::error::RosterError;
use crate::model::NormalizedTable;
use crate::parsing::normalize::header_names;

/// Read one worksheet of an xlsx workbook into a table of strings.
///
/// `sheet` selects a worksheet by name; `None` reads the first one. The first
/// row of the used range is the header.
pub fn read_xlsx(bytes: &[u8], sheet: Option<&str>) -> Result<NormalizedTable, RosterError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| RosterError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| RosterError::Spreadsheet("workbook has no worksheets".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| RosterError::Spreadsheet(format!("sheet '{sheet_name}' not found: {e}")))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        RosterError::Spreadsheet(format!("sheet '{sheet_name}' has no columns to parse"))
    })?;

    let mut table = NormalizedTable::new(header_names(header.iter().map(cell_as_string)));
    for row in rows {
        table.push_row(row.iter().map(cell_as_string).collect());
    }

    Ok(table)
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a cell the way it reads in the sheet, never coercing it.
pub(crate) fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(true) => "True".into(),
        Data::Bool(false) => "False".into(),
        Data::DateTime(dt) => cell
            .as_datetime()
            .map(|d| d.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| dt.to_string()),
        Data::DateTimeIso(s) => cell
            .as_datetime()
            .map(|d| d.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| s.clone()),
        Data::DurationIso(s) => s.clone(),
        _ => format!("{cell}"),
    }
}

/// Whole numbers lose the trailing ".0" (xlsx stores every number as a float).
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
