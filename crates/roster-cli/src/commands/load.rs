use roster_core::error::RosterError;
use roster_core::IngestOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    files: &[PathBuf],
    options: &IngestOptions,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), RosterError> {
    let report = super::upload(files, options);
    let combined = &report.combined;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&output::json::to_records(combined))?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Merged {} row(s) from {} file(s), written to {}",
                combined.row_count(),
                files.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(combined)?,
            _ if combined.columns().is_empty() => eprintln!("No data loaded"),
            _ => print!("{}", output::table::format_table(combined, true)),
        },
    }

    Ok(())
}
