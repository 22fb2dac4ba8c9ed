use std::fmt;
use std::path::Path;

use crate::error::RosterError;

/// A file handed to the ingestor: its name (used for the extension and for
/// error reports) and its full contents.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl RawFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        RawFile {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, naming it by its file name.
    pub fn from_path(path: &Path) -> Result<RawFile, RosterError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(RawFile { name, bytes })
    }

    /// Lowercased extension taken from the file name, or "" when there is none.
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Spreadsheet,
    Json,
    Pdf,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Result<FileKind, RosterError> {
        match ext.trim().to_lowercase().as_str() {
            "csv" => Ok(FileKind::Csv),
            "xlsx" => Ok(FileKind::Spreadsheet),
            "json" => Ok(FileKind::Json),
            "pdf" => Ok(FileKind::Pdf),
            other => Err(RosterError::UnsupportedFileType(other.to_string())),
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Csv => write!(f, "CSV"),
            FileKind::Spreadsheet => write!(f, "Excel"),
            FileKind::Json => write!(f, "JSON"),
            FileKind::Pdf => write!(f, "PDF"),
        }
    }
}

/// Rectangular string table: ordered column names plus rows of cells.
///
/// Every row holds exactly `columns.len()` cells. Missing values are empty
/// strings. Column names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// The row-wise union of every table ingested during one pass.
pub type CombinedTable = NormalizedTable;

impl NormalizedTable {
    pub fn new(columns: Vec<String>) -> Self {
        NormalizedTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and rows, padding short rows with empty
    /// cells and truncating long ones.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = NormalizedTable::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Index of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Append a new column, filling existing rows with empty cells.
    pub fn push_column(&mut self, name: String) {
        self.columns.push(name);
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    pub fn rename_columns(&mut self, mut f: impl FnMut(&str) -> String) {
        for column in &mut self.columns {
            *column = f(column);
        }
    }

    pub fn map_cells(&mut self, mut f: impl FnMut(&str) -> String) {
        for cell in self.rows.iter_mut().flatten() {
            *cell = f(cell);
        }
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.columns, self.rows)
    }
}

/// Result of ingesting one file during an upload pass.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read and its rows merged.
    Loaded { file: String, rows: usize },
    /// PDF extraction failed; the file counted as an empty table.
    Empty { file: String, reason: RosterError },
    /// The file could not be read and was skipped.
    Failed { file: String, error: RosterError },
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, FileOutcome::Loaded { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Loaded { file, rows } => write!(f, "Loaded {rows} row(s) from {file}"),
            FileOutcome::Empty { reason, .. } => write!(f, "PDF Error: {reason}"),
            FileOutcome::Failed { file, error } => write!(f, "Error processing {file}: {error}"),
        }
    }
}

/// Combined table plus what happened to each file of one upload pass.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub combined: CombinedTable,
    pub outcomes: Vec<FileOutcome>,
}

impl UploadReport {
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercased() {
        assert_eq!(RawFile::new("Students.CSV", vec![]).extension(), "csv");
        assert_eq!(RawFile::new("archive.tar.PDF", vec![]).extension(), "pdf");
        assert_eq!(RawFile::new("README", vec![]).extension(), "");
    }

    #[test]
    fn test_file_kind_dispatch() {
        assert_eq!(FileKind::from_extension("xlsx").unwrap(), FileKind::Spreadsheet);
        assert_eq!(FileKind::from_extension("JSON").unwrap(), FileKind::Json);
        assert!(matches!(
            FileKind::from_extension("xls"),
            Err(RosterError::UnsupportedFileType(ext)) if ext == "xls"
        ));
    }

    #[test]
    fn test_rows_are_rectangular() {
        let table = NormalizedTable::from_rows(
            vec!["A".into(), "B".into()],
            vec![vec!["1".into()], vec!["1".into(), "2".into(), "3".into()]],
        );
        assert!(table.rows().iter().all(|r| r.len() == 2));
        assert_eq!(table.rows()[0], vec!["1", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2"]);
    }

    #[test]
    fn test_empty_means_no_rows_or_no_columns() {
        assert!(NormalizedTable::default().is_empty());
        assert!(NormalizedTable::new(vec!["Name".into()]).is_empty());
        let table = NormalizedTable::from_rows(vec!["Name".into()], vec![vec!["ALI".into()]]);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_push_column_fills_existing_rows() {
        let mut table = NormalizedTable::from_rows(vec!["A".into()], vec![vec!["1".into()]]);
        table.push_column("B".into());
        assert_eq!(table.columns(), ["A", "B"]);
        assert_eq!(table.rows()[0], vec!["1", ""]);
    }
}
