#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unsupported file type '{0}'. Supported types: csv, xlsx, json, pdf")]
    UnsupportedFileType(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to parse CSV: {0}")]
    Csv(String),

    #[error("failed to parse spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("unsupported JSON layout: {0}")]
    JsonLayout(String),

    #[error("Column '{0}' not found in uploaded data")]
    ColumnNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e.to_string())
    }
}
