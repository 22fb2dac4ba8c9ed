pub mod load;
pub mod schema;
pub mod search;

use roster_core::extraction::pdftotext::PdftotextExtractor;
use roster_core::model::{FileOutcome, RawFile, UploadReport};
use roster_core::{ingest_into, IngestOptions};
use std::path::{Path, PathBuf};

/// Read and merge the given files, printing one line per file that failed.
///
/// Unreadable paths are reported like any other per-file failure, in the
/// order the paths were given.
pub fn upload(files: &[PathBuf], options: &IngestOptions) -> UploadReport {
    if files.iter().any(|p| is_pdf(p)) && !PdftotextExtractor::is_available() {
        tracing::warn!("pdftotext is not installed; PDF files will load as empty tables");
    }

    let extractor = PdftotextExtractor::new();
    let mut report = UploadReport::default();
    for path in files {
        tracing::debug!(path = %path.display(), "reading file");
        match RawFile::from_path(path) {
            Ok(file) => ingest_into(&mut report, &file, &extractor, options),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "cannot read file");
                report.outcomes.push(FileOutcome::Failed {
                    file: path.display().to_string(),
                    error,
                });
            }
        }
    }

    for failure in report.failures() {
        eprintln!("{failure}");
    }

    report
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
