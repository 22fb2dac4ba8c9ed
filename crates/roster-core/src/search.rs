use std::fmt;

use crate::error::RosterError;
use crate::model::{CombinedTable, NormalizedTable};

/// The columns a search may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchColumn {
    RollNo,
    Name,
    FatherName,
    Gender,
}

impl SearchColumn {
    pub const ALL: [SearchColumn; 4] = [
        SearchColumn::RollNo,
        SearchColumn::Name,
        SearchColumn::FatherName,
        SearchColumn::Gender,
    ];

    /// Column name as it appears in a normalized table.
    pub fn label(self) -> &'static str {
        match self {
            SearchColumn::RollNo => "Roll No",
            SearchColumn::Name => "Name",
            SearchColumn::FatherName => "Father Name",
            SearchColumn::Gender => "Gender",
        }
    }
}

impl fmt::Display for SearchColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A column plus a non-blank, trimmed search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    column: SearchColumn,
    term: String,
}

impl SearchQuery {
    /// Build a query. A blank term means "no search", so it yields `None`.
    pub fn new(column: SearchColumn, term: &str) -> Option<SearchQuery> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(SearchQuery {
            column,
            term: term.to_string(),
        })
    }

    pub fn column(&self) -> SearchColumn {
        self.column
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Matching rows, trimmed and re-indexed from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub table: NormalizedTable,
}

impl SearchResult {
    pub fn count(&self) -> usize {
        self.table.row_count()
    }

    /// Rows paired with their fresh sequential index.
    pub fn indexed_rows(&self) -> impl Iterator<Item = (usize, &Vec<String>)> {
        self.table.rows().iter().enumerate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing has been loaded; the search was not attempted.
    NoData,
    NoMatches,
    Found(SearchResult),
}

/// Exact-match search, ignoring surrounding whitespace and letter case.
///
/// An empty combined table is reported before the column lookup, so a search
/// with no data never surfaces [`RosterError::ColumnNotFound`].
pub fn search(combined: &CombinedTable, query: &SearchQuery) -> Result<SearchOutcome, RosterError> {
    if combined.is_empty() {
        return Ok(SearchOutcome::NoData);
    }

    let label = query.column().label();
    let idx = combined
        .column_index(label)
        .ok_or_else(|| RosterError::ColumnNotFound(label.to_string()))?;

    let mut trimmed = combined.clone();
    trimmed.map_cells(|cell| cell.trim().to_string());

    let needle = case_fold(query.term());
    let (columns, rows) = trimmed.into_parts();
    let matches: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|row| case_fold(&row[idx]) == needle)
        .collect();

    tracing::debug!(column = label, matches = matches.len(), "search finished");

    if matches.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }

    Ok(SearchOutcome::Found(SearchResult {
        table: NormalizedTable::from_rows(columns, matches),
    }))
}

fn case_fold(s: &str) -> String {
    s.trim().to_lowercase()
}
