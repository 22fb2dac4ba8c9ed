pub mod error;
pub mod extraction;
pub mod ingest;
pub mod merge;
pub mod model;
pub mod parsing;
pub mod schema;
pub mod search;

pub use extraction::IngestOptions;
pub use ingest::{ingest_file, ingest_into, process_uploads};
pub use schema::example_table;
pub use search::{search, SearchColumn, SearchOutcome, SearchQuery, SearchResult};

use error::RosterError;
use extraction::PdfExtractor;
use model::{RawFile, UploadReport};

/// Main API entry point: ingest the uploaded files and, when a query is
/// given, search the combined table.
///
/// Returns the upload report (combined table and per-file outcomes) plus the
/// search outcome. A `None` query skips the search entirely.
pub fn run(
    files: &[RawFile],
    query: Option<&SearchQuery>,
    extractor: &dyn PdfExtractor,
    options: &IngestOptions,
) -> (UploadReport, Option<Result<SearchOutcome, RosterError>>) {
    let report = process_uploads(files, extractor, options);
    let outcome = query.map(|q| search(&report.combined, q));
    (report, outcome)
}
