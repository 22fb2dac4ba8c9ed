//! Reconstruct tables from `pdftotext -layout` page text.
//!
//! Each page holds at most one table. The first line that splits into two or
//! more cells on whitespace gaps is the header, and the header's cell
//! positions decide which column every data cell belongs to.

use crate::extraction::{PageContent, PdfExtractor};
use crate::error::RosterError;
use crate::merge::merge_into;
use crate::model::NormalizedTable;
use crate::parsing::split_with_offsets;

/// Extract every page table from a PDF and stack them row-wise.
///
/// Tables from different pages are aligned by column name only; differing
/// headers across pages are not reconciled. Returns an empty table when no
/// page holds a table.
pub fn extract_pdf_table(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<NormalizedTable, RosterError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted PDF text"
    );
    Ok(stack_page_tables(&pages))
}

/// Stack the tables of all pages into one table.
pub fn stack_page_tables(pages: &[PageContent]) -> NormalizedTable {
    let mut stacked = NormalizedTable::default();

    for page in pages {
        if let Some(table) = extract_page_table(page) {
            tracing::debug!(
                page = page.page_number,
                columns = table.columns().len(),
                rows = table.row_count(),
                "found page table"
            );
            merge_into(&mut stacked, table);
        }
    }

    stacked
}

/// Extract the table of a single page.
///
/// The table spans from the header (the first line with two or more cells)
/// to the last line with two or more cells. Data cells are placed by where
/// they start on the line, so blank cells stay blank instead of shifting
/// later values left. Returns `None` when the page has no header line or no
/// non-empty data row under it.
pub fn extract_page_table(page: &PageContent) -> Option<NormalizedTable> {
    let lines: Vec<Vec<(usize, &str)>> = page
        .lines
        .iter()
        .map(|line| split_with_offsets(line))
        .collect();

    let header_idx = lines.iter().position(|cells| cells.len() >= 2)?;
    let last_idx = lines.iter().rposition(|cells| cells.len() >= 2)?;

    let header_cells = &lines[header_idx];
    let header: Vec<String> = header_cells
        .iter()
        .map(|(_, c)| c.trim().to_string())
        .collect();
    let bounds = column_bounds(header_cells);

    let rows: Vec<Vec<String>> = lines[header_idx + 1..=last_idx]
        .iter()
        .map(|cells| place_cells(cells, &bounds))
        .filter(|row| row.iter().any(|c| !c.is_empty()))
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(NormalizedTable::from_rows(header, rows))
}

/// Left edge of every column: 0 for the first, then halfway between the end
/// of the previous header cell and the start of this one.
fn column_bounds(header: &[(usize, &str)]) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(header.len());
    let mut prev_end = 0;
    for (i, (start, text)) in header.iter().enumerate() {
        bounds.push(if i == 0 { 0 } else { (prev_end + start) / 2 });
        prev_end = start + text.chars().count();
    }
    bounds
}

/// Put each segment in the column whose range holds its start. Segments
/// landing in the same column are joined with a space.
fn place_cells(cells: &[(usize, &str)], bounds: &[usize]) -> Vec<String> {
    let mut row = vec![String::new(); bounds.len()];
    for (start, text) in cells {
        let column = bounds.iter().rposition(|b| b <= start).unwrap_or(0);
        let text = text.trim();
        if row[column].is_empty() {
            row[column] = text.to_string();
        } else {
            row[column].push(' ');
            row[column].push_str(text);
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_extract_page_table() {
        let p = page(
            1,
            &[
                "Class List 2024",
                "",
                "  roll no   name     father name   gender",
                "  1         ALI      Adnan          Male",
                "  2         SANA     Usman          Female",
                "",
                "Page 1",
            ],
        );
        let table = extract_page_table(&p).unwrap();
        assert_eq!(table.columns(), ["roll no", "name", "father name", "gender"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], vec!["2", "SANA", "Usman", "Female"]);
    }

    fn layout(cells: [&str; 4]) -> String {
        format!("{:<10}{:<9}{:<14}{}", cells[0], cells[1], cells[2], cells[3])
    }

    #[test]
    fn test_blank_cells_keep_their_column() {
        let lines = [
            layout(["Roll No", "Name", "Father Name", "Gender"]),
            layout(["1", "ALI", "", "Male"]),
            layout(["2", "", "", "Female"]),
            layout(["3", "SANA", "Usman", ""]),
            layout(["4", "", "", ""]),
            layout(["5", "AHMED", "Zubair", "Male"]),
        ];
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let table = extract_page_table(&page(1, &lines)).unwrap();

        assert_eq!(table.columns(), ["Roll No", "Name", "Father Name", "Gender"]);
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.rows()[0], vec!["1", "ALI", "", "Male"]);
        assert_eq!(table.rows()[1], vec!["2", "", "", "Female"]);
        assert_eq!(table.rows()[2], vec!["3", "SANA", "Usman", ""]);
        assert_eq!(table.rows()[3], vec!["4", "", "", ""]);
    }

    #[test]
    fn test_overflowing_text_joins_last_column() {
        let lines = [
            layout(["Roll No", "Name", "Father Name", "Gender"]),
            format!("{}   extra", layout(["1", "ALI", "Adnan", "Male"])),
        ];
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let table = extract_page_table(&page(1, &lines)).unwrap();
        assert_eq!(table.rows()[0], vec!["1", "ALI", "Adnan", "Male extra"]);
    }

    #[test]
    fn test_trailing_single_cell_lines_outside_table() {
        let p = page(
            1,
            &[
                "Roll No   Name",
                "1         ALI",
                "2",
                "3         SANA",
                "",
                "Page 1",
            ],
        );
        let table = extract_page_table(&p).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[1], vec!["2", ""]);
    }

    #[test]
    fn test_header_only_page_has_no_table() {
        let p = page(1, &["Roll No   Name", "", "no rows here"]);
        assert!(extract_page_table(&p).is_none());
    }

    #[test]
    fn test_page_without_table() {
        let p = page(1, &["Just a paragraph of text.", "Another line."]);
        assert!(extract_page_table(&p).is_none());
    }

    #[test]
    fn test_stack_pages_with_different_headers() {
        let pages = vec![
            page(1, &["Roll No   Name", "1         ALI"]),
            page(2, &["Just prose"]),
            page(3, &["Roll No   Gender", "2         Female", "3         Male"]),
        ];
        let stacked = stack_page_tables(&pages);
        assert_eq!(stacked.columns(), ["Roll No", "Name", "Gender"]);
        assert_eq!(stacked.row_count(), 3);
        assert_eq!(stacked.rows()[0], vec!["1", "ALI", ""]);
        assert_eq!(stacked.rows()[1], vec!["2", "", "Female"]);
    }

    #[test]
    fn test_no_pages_gives_empty_table() {
        let stacked = stack_page_tables(&[]);
        assert!(stacked.is_empty());
        assert!(stacked.columns().is_empty());
    }
}
