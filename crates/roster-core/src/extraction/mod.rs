pub mod delimited;
pub mod json;
pub mod pdftotext;
pub mod spreadsheet;
pub mod table;

use crate::error::RosterError;

/// Text content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RosterError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Reader settings shared by the file-type specific readers.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field delimiter for CSV files.
    pub delimiter: u8,
    /// Worksheet to read from xlsx files. `None` reads the first sheet.
    pub sheet: Option<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions {
            delimiter: b',',
            sheet: None,
        }
    }
}
