use crate::error::RosterError;
use crate::extraction::table::extract_pdf_table;
use crate::extraction::{delimited, json, spreadsheet, IngestOptions, PdfExtractor};
use crate::merge::merge_into;
use crate::model::{FileKind, FileOutcome, NormalizedTable, RawFile, UploadReport};
use crate::parsing::normalize::normalize_columns;

/// A table read from one file, with column names normalized.
#[derive(Debug)]
pub enum Ingested {
    Table(NormalizedTable),
    /// PDF extraction failed. The file counts as an empty table.
    Recovered(RosterError),
}

/// Read one file into a normalized table.
///
/// Errors mean the file must be skipped. A failing PDF extraction is not an
/// error here: it comes back as [`Ingested::Recovered`].
pub fn ingest_file(
    file: &RawFile,
    extractor: &dyn PdfExtractor,
    options: &IngestOptions,
) -> Result<Ingested, RosterError> {
    let kind = FileKind::from_extension(&file.extension())?;
    tracing::debug!(file = %file.name, %kind, bytes = file.bytes.len(), "ingesting file");

    let mut table = match kind {
        FileKind::Csv => delimited::read_delimited(&file.bytes, options.delimiter)?,
        FileKind::Spreadsheet => spreadsheet::read_xlsx(&file.bytes, options.sheet.as_deref())?,
        FileKind::Json => json::read_json(&file.bytes)?,
        FileKind::Pdf => match extract_pdf_table(&file.bytes, extractor) {
            Ok(table) => table,
            Err(e) => return Ok(Ingested::Recovered(e)),
        },
    };

    normalize_columns(&mut table);
    Ok(Ingested::Table(table))
}

/// Ingest every file in order and merge the results into a fresh combined
/// table. One failing file never stops the others.
pub fn process_uploads(
    files: &[RawFile],
    extractor: &dyn PdfExtractor,
    options: &IngestOptions,
) -> UploadReport {
    let mut report = UploadReport::default();

    for file in files {
        ingest_into(&mut report, file, extractor, options);
    }

    tracing::info!(
        files = files.len(),
        rows = report.combined.row_count(),
        columns = report.combined.columns().len(),
        "merged uploads"
    );

    report
}

/// Ingest one file, merge it into `report.combined` and record its outcome
/// after the ones already in the report.
pub fn ingest_into(
    report: &mut UploadReport,
    file: &RawFile,
    extractor: &dyn PdfExtractor,
    options: &IngestOptions,
) {
    let outcome = match ingest_file(file, extractor, options) {
        Ok(Ingested::Table(table)) => {
            let rows = table.row_count();
            merge_into(&mut report.combined, table);
            FileOutcome::Loaded {
                file: file.name.clone(),
                rows,
            }
        }
        Ok(Ingested::Recovered(reason)) => {
            tracing::warn!(file = %file.name, error = %reason, "PDF extraction failed, treating as empty");
            FileOutcome::Empty {
                file: file.name.clone(),
                reason,
            }
        }
        Err(error) => {
            tracing::warn!(file = %file.name, %error, "skipping file");
            FileOutcome::Failed {
                file: file.name.clone(),
                error,
            }
        }
    };
    report.outcomes.push(outcome);
}
